//! Audio decoding using Symphonia
//!
//! Probes the container, decodes the first audio track to interleaved `f32`,
//! then downmixes to mono so the result can go straight into the extractor.
//! Integer formats are scaled to [-1.0, 1.0] by Symphonia's sample conversion.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use symphonia::core::audio::SampleBuffer as PcmBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;
use crate::io::sample_buffer::SampleBuffer;
use crate::preprocessing::channel_mixer::{downmix_interleaved, ChannelMixMode};

/// Decode an audio file to a mono `SampleBuffer`
///
/// # Arguments
///
/// * `path` - Path to an audio file (WAV, FLAC, MP3, AAC/M4A, Ogg Vorbis)
/// * `mode` - How to fold multiple channels into one
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be opened or
/// probed, has no audio track, or declares no sample rate. Corrupt packets
/// are skipped with a warning rather than aborting the decode.
///
/// # Example
///
/// ```no_run
/// use stagecoach_dsp::io::decoder::decode_file;
/// use stagecoach_dsp::preprocessing::channel_mixer::ChannelMixMode;
///
/// let buffer = decode_file("take1.m4a", ChannelMixMode::Average)?;
/// println!("{:.1}s at {} Hz", buffer.duration_seconds(), buffer.sample_rate());
/// # Ok::<(), stagecoach_dsp::AnalysisError>(())
/// ```
pub fn decode_file<P: AsRef<Path>>(
    path: P,
    mode: ChannelMixMode,
) -> Result<SampleBuffer, AnalysisError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::DecodingError(format!("Unsupported format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::DecodingError("No supported audio tracks found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let sample_rate = codec_params.sample_rate.ok_or_else(|| {
        AnalysisError::DecodingError("Audio track does not declare a sample rate".to_string())
    })?;
    let mut channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::DecodingError(format!("Unsupported codec: {}", e)))?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut pcm: Option<PcmBuffer<f32>> = None;
    let mut skipped_packets = 0usize;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Failed to read packet: {}",
                    e
                )))
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                channels = spec.channels.count();

                let needs_alloc = pcm
                    .as_ref()
                    .map_or(true, |buf| buf.capacity() < decoded.capacity());
                if needs_alloc {
                    pcm = Some(PcmBuffer::new(decoded.capacity() as u64, spec));
                }

                if let Some(buf) = pcm.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    interleaved.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(msg)) => {
                skipped_packets += 1;
                log::warn!("Skipping corrupt packet: {}", msg);
            }
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Decoder failed: {}",
                    e
                )))
            }
        }
    }

    log::debug!(
        "Decoded {} interleaved samples ({} channels, {} Hz, {} packets skipped)",
        interleaved.len(),
        channels,
        sample_rate,
        skipped_packets
    );

    let mono = downmix_interleaved(&interleaved, channels, mode)?;
    SampleBuffer::new(mono, sample_rate)
}
