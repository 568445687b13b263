//! # Stagecoach DSP
//!
//! Deterministic scalar descriptors for a recorded vocal performance, for
//! feeding coaching feedback generators.
//!
//! ## Features
//!
//! - **Average volume**: mean absolute amplitude, 0-100
//! - **Volume variation**: spread of loudness across fixed-size windows
//! - **Pitch stability**: share of 100 ms windows that contain zero-crossings
//!   (a voiced/unvoiced proxy, not pitch detection)
//! - **Rhythm consistency**: inverse variance of energy across 500 ms windows
//!
//! ## Quick Start
//!
//! ```no_run
//! use stagecoach_dsp::{analyze_audio, AnalysisConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let result = analyze_audio(&samples, sample_rate, AnalysisConfig::default())?;
//!
//! println!("{}", result.descriptor_line());
//! # Ok::<(), stagecoach_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Decoder (optional) → SampleBuffer → FeatureExtractor → 4 meters → AnalysisResult
//! ```
//!
//! Each meter is a single linear pass over the shared buffer. Divisions are
//! guarded: degenerate input yields `0.0` instead of NaN.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::extractor::FeatureExtractor;
pub use analysis::result::AnalysisResult;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use io::sample_buffer::SampleBuffer;

/// Main analysis function
///
/// Validates the input and returns the five scalar descriptors.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Analysis configuration parameters
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the sample rate is zero, a sample
/// is not finite, or the configuration is invalid. An empty sample slice is
/// not an error; its metrics fall back to `0.0`.
///
/// # Example
///
/// ```
/// use stagecoach_dsp::{analyze_audio, AnalysisConfig};
///
/// let samples = vec![0.0f32; 44100]; // 1 second of silence
/// let result = analyze_audio(&samples, 44100, AnalysisConfig::default())?;
/// assert_eq!(result.avg_volume, 0.0);
/// assert_eq!(result.rhythm_consistency, 100.0);
/// # Ok::<(), stagecoach_dsp::AnalysisError>(())
/// ```
pub fn analyze_audio(
    samples: &[f32],
    sample_rate: u32,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let extractor = FeatureExtractor::new(config)?;
    let buffer = SampleBuffer::new(samples.to_vec(), sample_rate)?;
    Ok(extractor.extract(&buffer))
}

/// Analyze an already validated buffer
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the configuration is invalid.
pub fn analyze_buffer(
    buffer: &SampleBuffer,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let extractor = FeatureExtractor::new(config)?;
    Ok(extractor.extract(buffer))
}
