//! Integration tests for the feature extraction engine

use stagecoach_dsp::io::decoder::decode_file;
use stagecoach_dsp::preprocessing::channel_mixer::ChannelMixMode;
use stagecoach_dsp::{analyze_audio, analyze_buffer, AnalysisConfig, AnalysisError, SampleBuffer};
use std::path::Path;

/// Deterministic pseudo-random samples in [-amplitude, amplitude]
fn noise(len: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
            (unit * 2.0 - 1.0) * amplitude
        })
        .collect()
}

/// Sung-note stand-in: a sine with a slow tremolo and a 300 ms rest every 2 s
fn phrase(sample_rate: u32, seconds: f32) -> Vec<f32> {
    let n = (seconds * sample_rate as f32) as usize;
    let cycle = 2 * sample_rate as usize;
    let rest_start = 17 * sample_rate as usize / 10;
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            if i % cycle >= rest_start {
                0.0
            } else {
                let envelope = 0.4 + 0.2 * (2.0 * std::f32::consts::PI * 0.5 * t).sin();
                envelope * (2.0 * std::f32::consts::PI * 261.63 * t).sin()
            }
        })
        .collect()
}

fn alternating(len: usize) -> Vec<f32> {
    (0..len).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect()
}

fn write_wav(path: &Path, channels: u16, sample_rate: u32, frames: &[Vec<f32>]) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for frame in frames {
        for &s in frame {
            writer
                .write_sample((s * i16::MAX as f32) as i16)
                .expect("Failed to write sample");
        }
    }
    writer.finalize().expect("Failed to finalize WAV");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_alternating_one_second() {
        let samples = alternating(44100);
        let result = analyze_audio(&samples, 44100, AnalysisConfig::default())
            .expect("Analysis should succeed");

        assert_eq!(result.duration_seconds, 1.0);
        assert_eq!(result.avg_volume, 100.0);
        assert_eq!(result.volume_variation, 0.0);
        assert_eq!(result.pitch_stability, 100.0);
        assert_eq!(result.rhythm_consistency, 100.0);
        assert_eq!(
            result.descriptor_line(),
            "Audio: 1.0s, Volume: 100.0%, Variation: 0.000, Stability: 100.0%, Rhythm: 100.0%"
        );
    }

    #[test]
    fn test_silence_property() {
        for &rate in &[8000u32, 22050, 44100, 48000] {
            let samples = vec![0.0f32; rate as usize * 3];
            let result = analyze_audio(&samples, rate, AnalysisConfig::default()).unwrap();
            assert_eq!(result.avg_volume, 0.0, "rate={}", rate);
            assert_eq!(result.volume_variation, 0.0, "rate={}", rate);
            assert_eq!(result.pitch_stability, 0.0, "rate={}", rate);
            assert_eq!(result.rhythm_consistency, 100.0, "rate={}", rate);
        }
    }

    #[test]
    fn test_zero_sample_rate_aborts() {
        let result = analyze_audio(&[0.1, 0.2], 0, AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_sample_aborts() {
        let mut samples = phrase(44100, 1.0);
        samples[1234] = f32::NAN;
        let result = analyze_audio(&samples, 44100, AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_buffer_is_safe() {
        let result = analyze_audio(&[], 44100, AnalysisConfig::default()).unwrap();
        assert_eq!(result.duration_seconds, 0.0);
        assert_eq!(result.avg_volume, 0.0);
        assert_eq!(result.volume_variation, 0.0);
        assert_eq!(result.pitch_stability, 0.0);
        assert_eq!(result.rhythm_consistency, 0.0);
    }

    #[test]
    fn test_ranges_hold_across_inputs() {
        let inputs: Vec<(Vec<f32>, u32)> = vec![
            (noise(44100 * 2, 1.0, 1), 44100),
            (noise(12345, 0.3, 2), 48000),
            (noise(3, 0.9, 3), 44100),
            (phrase(22050, 5.0), 22050),
            (phrase(44100, 2.3), 44100),
            (alternating(7), 9),
            (vec![1.0f32; 50000], 16000),
            (vec![-1.0f32; 4410], 44100),
        ];

        for (i, (samples, rate)) in inputs.iter().enumerate() {
            let r = analyze_audio(samples, *rate, AnalysisConfig::default()).unwrap();
            assert!((0.0..=100.0).contains(&r.avg_volume), "case {}: {:?}", i, r);
            assert!(r.volume_variation >= 0.0, "case {}: {:?}", i, r);
            assert!((0.0..=100.0).contains(&r.pitch_stability), "case {}: {:?}", i, r);
            assert!((0.0..=100.0).contains(&r.rhythm_consistency), "case {}: {:?}", i, r);
            assert!(r.duration_seconds.is_finite(), "case {}: {:?}", i, r);
        }
    }

    #[test]
    fn test_determinism() {
        let samples = phrase(44100, 4.0);
        let config = AnalysisConfig::default();
        let first = analyze_audio(&samples, 44100, config.clone()).unwrap();
        let second = analyze_audio(&samples, 44100, config).unwrap();

        assert_eq!(first.avg_volume.to_bits(), second.avg_volume.to_bits());
        assert_eq!(first.volume_variation.to_bits(), second.volume_variation.to_bits());
        assert_eq!(first.pitch_stability.to_bits(), second.pitch_stability.to_bits());
        assert_eq!(first.rhythm_consistency.to_bits(), second.rhythm_consistency.to_bits());
        assert_eq!(first.duration_seconds.to_bits(), second.duration_seconds.to_bits());
    }

    #[test]
    fn test_scaling_never_increases_volume() {
        let samples = noise(44100, 0.8, 42);
        let base = analyze_audio(&samples, 44100, AnalysisConfig::default()).unwrap();

        for &k in &[1.0f32, 0.9, 0.5, 0.25, 0.01] {
            let scaled: Vec<f32> = samples.iter().map(|&s| s * k).collect();
            let r = analyze_audio(&scaled, 44100, AnalysisConfig::default()).unwrap();
            assert!(
                r.avg_volume <= base.avg_volume,
                "k={}: {} > {}",
                k,
                r.avg_volume,
                base.avg_volume
            );
        }
    }

    #[test]
    fn test_exactly_one_volume_window() {
        let samples = noise(4410, 0.7, 9);
        let result = analyze_audio(&samples, 44100, AnalysisConfig::default()).unwrap();
        assert_eq!(result.volume_variation, 0.0);
    }

    #[test]
    fn test_fixed_volume_window_ignores_sample_rate() {
        // Same samples at two rates: the sample-count window gives the same
        // variation, while the duration changes with the rate.
        let mut samples = vec![0.1f32; 4410];
        samples.extend(vec![0.5f32; 4410]);

        let at_44k = analyze_audio(&samples, 44100, AnalysisConfig::default()).unwrap();
        let at_8k = analyze_audio(&samples, 8000, AnalysisConfig::default()).unwrap();

        assert_eq!(at_44k.volume_variation, at_8k.volume_variation);
        assert_eq!(at_44k.volume_variation, 0.2);
        assert_eq!(at_44k.duration_seconds, 0.2);
        assert_eq!(at_8k.duration_seconds, 1.1);
    }

    #[test]
    fn test_phrase_with_rests() {
        let samples = phrase(44100, 6.0);
        let result = analyze_audio(&samples, 44100, AnalysisConfig::default()).unwrap();

        // 0.3 s of every 2 s is silence: 9 of 60 windows are silent
        assert_eq!(result.pitch_stability, 85.0);
        assert!(result.avg_volume > 10.0 && result.avg_volume < 40.0, "{:?}", result);
        assert!(result.volume_variation > 0.0, "{:?}", result);
        assert_eq!(result.duration_seconds, 6.0);
    }

    #[test]
    fn test_parallel_meters_match() {
        let buffer = SampleBuffer::new(phrase(48000, 3.3), 48000).unwrap();
        let sequential = analyze_buffer(&buffer, AnalysisConfig::default()).unwrap();
        let parallel = analyze_buffer(
            &buffer,
            AnalysisConfig {
                parallel_meters: true,
                ..AnalysisConfig::default()
            },
        )
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_config_from_json() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"volume_window_samples": 2205, "parallel_meters": true}"#)
                .unwrap();
        assert_eq!(config.volume_window_samples, 2205);
        assert!(config.parallel_meters);
        assert_eq!(config.rhythm_window_seconds, 0.5);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = analyze_audio(&alternating(44100), 44100, AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["durationSeconds"], 1.0);
        assert_eq!(json["avgVolume"], 100.0);
        assert_eq!(json["pitchStability"], 100.0);
        assert!(json.get("rhythmConsistency").is_some());
        assert!(json.get("volumeVariation").is_some());
    }

    #[test]
    fn test_decode_stereo_wav_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("take.wav");

        // Left channel carries the signal, right channel is silent
        let frames: Vec<Vec<f32>> = alternating(44100)
            .into_iter()
            .map(|s| vec![s * 0.5, 0.0])
            .collect();
        write_wav(&path, 2, 44100, &frames);

        let first = decode_file(&path, ChannelMixMode::FirstChannel).expect("Decode should succeed");
        assert_eq!(first.sample_rate(), 44100);
        assert_eq!(first.len(), 44100);

        let result = analyze_buffer(&first, AnalysisConfig::default()).unwrap();
        assert_eq!(result.duration_seconds, 1.0);
        assert!((result.avg_volume - 50.0).abs() <= 0.1, "{:?}", result);
        assert_eq!(result.pitch_stability, 100.0);

        let averaged = decode_file(&path, ChannelMixMode::Average).unwrap();
        let result = analyze_buffer(&averaged, AnalysisConfig::default()).unwrap();
        assert!((result.avg_volume - 25.0).abs() <= 0.1, "{:?}", result);

        let dominant = decode_file(&path, ChannelMixMode::Dominant).unwrap();
        assert_eq!(dominant.samples(), first.samples());
    }
}
