//! Channel mixing utilities (interleaved multi-channel to mono)

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Channel mixing mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMixMode {
    /// Per-frame average of all channels
    #[default]
    Average,
    /// Keep channel 0 only, as browser capture paths usually do
    FirstChannel,
    /// Keep the channel with the highest total energy
    Dominant,
}

/// Convert interleaved samples to mono
///
/// # Arguments
///
/// * `samples` - Interleaved samples (`frame0_ch0, frame0_ch1, ..., frame1_ch0, ...`)
/// * `channels` - Number of interleaved channels
/// * `mode` - Mixing mode
///
/// # Returns
///
/// Mono samples, one per frame
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `channels` is zero or the sample
/// count is not a whole number of frames.
///
/// # Example
///
/// ```
/// use stagecoach_dsp::preprocessing::channel_mixer::{downmix_interleaved, ChannelMixMode};
///
/// let stereo = [0.2f32, 0.4, -0.6, -0.2];
/// let mono = downmix_interleaved(&stereo, 2, ChannelMixMode::Average)?;
/// assert_eq!(mono.len(), 2);
/// # Ok::<(), stagecoach_dsp::AnalysisError>(())
/// ```
pub fn downmix_interleaved(
    samples: &[f32],
    channels: usize,
    mode: ChannelMixMode,
) -> Result<Vec<f32>, AnalysisError> {
    if channels == 0 {
        return Err(AnalysisError::InvalidInput(
            "Channel count must be > 0".to_string(),
        ));
    }

    if samples.len() % channels != 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "{} samples is not a whole number of {}-channel frames",
            samples.len(),
            channels
        )));
    }

    if channels == 1 {
        return Ok(samples.to_vec());
    }

    log::debug!(
        "Downmixing {} frames of {} channels using {:?}",
        samples.len() / channels,
        channels,
        mode
    );

    let mono = match mode {
        ChannelMixMode::Average => samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect(),
        ChannelMixMode::FirstChannel => extract_channel(samples, channels, 0),
        ChannelMixMode::Dominant => {
            let channel = dominant_channel(samples, channels);
            log::debug!("Dominant channel: {}", channel);
            extract_channel(samples, channels, channel)
        }
    };

    Ok(mono)
}

fn extract_channel(samples: &[f32], channels: usize, channel: usize) -> Vec<f32> {
    samples
        .iter()
        .skip(channel)
        .step_by(channels)
        .copied()
        .collect()
}

/// Index of the channel with the largest sum of squares; ties go to the lower index
fn dominant_channel(samples: &[f32], channels: usize) -> usize {
    let mut energies = vec![0.0f64; channels];
    for frame in samples.chunks_exact(channels) {
        for (energy, &s) in energies.iter_mut().zip(frame) {
            *energy += (s as f64) * (s as f64);
        }
    }

    let mut best = 0;
    for (ch, &energy) in energies.iter().enumerate().skip(1) {
        if energy > energies[best] {
            best = ch;
        }
    }
    best
}
