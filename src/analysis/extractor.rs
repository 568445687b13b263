//! Feature extractor: runs the four meters over one buffer
//!
//! # Example
//!
//! ```
//! use stagecoach_dsp::{AnalysisConfig, FeatureExtractor, SampleBuffer};
//!
//! let samples: Vec<f32> = (0..44100).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
//! let buffer = SampleBuffer::new(samples, 44100)?;
//! let extractor = FeatureExtractor::new(AnalysisConfig::default())?;
//!
//! let result = extractor.extract(&buffer);
//! assert_eq!(result.avg_volume, 100.0);
//! assert_eq!(result.pitch_stability, 100.0);
//! # Ok::<(), stagecoach_dsp::AnalysisError>(())
//! ```

use crate::analysis::result::AnalysisResult;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::loudness::average_volume;
use crate::features::loudness_variation::volume_variation;
use crate::features::rhythm::rhythm_consistency;
use crate::features::stability::pitch_stability;
use crate::features::stats::round_to;
use crate::io::sample_buffer::SampleBuffer;

/// Orchestrates the meters and assembles an `AnalysisResult`
///
/// Stateless apart from its configuration; `extract` is a pure function of
/// the buffer.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    config: AnalysisConfig,
}

/// Window lengths resolved against one buffer's sample rate
#[derive(Debug, Clone, Copy)]
struct Windows {
    volume: usize,
    stability: usize,
    rhythm: usize,
}

impl FeatureExtractor {
    /// Create an extractor with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the configuration is invalid.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every meter over `buffer`
    ///
    /// Degenerate buffers (empty, or shorter than a meter's window) produce the
    /// `0.0` fallbacks each meter defines; this never fails.
    pub fn extract(&self, buffer: &SampleBuffer) -> AnalysisResult {
        let sample_rate = buffer.sample_rate();
        let windows = Windows {
            volume: self.config.volume_window_samples,
            stability: self.config.stability_window_samples(sample_rate),
            rhythm: self.config.rhythm_window_samples(sample_rate),
        };

        log::debug!(
            "Extracting features: {} samples at {} Hz (windows: volume={}, stability={}, rhythm={})",
            buffer.len(),
            sample_rate,
            windows.volume,
            windows.stability,
            windows.rhythm
        );

        let samples = buffer.samples();
        let (avg_volume, volume_variation, pitch_stability, rhythm_consistency) =
            if self.config.parallel_meters {
                run_parallel(samples, windows)
            } else {
                run_sequential(samples, windows)
            };

        let result = AnalysisResult {
            duration_seconds: round_to(buffer.duration_seconds(), 1) as f32,
            avg_volume,
            volume_variation,
            pitch_stability,
            rhythm_consistency,
        };

        log::debug!("Extracted features: {}", result);

        result
    }
}

type MeterOutputs = (f32, f32, f32, f32);

fn run_sequential(samples: &[f32], windows: Windows) -> MeterOutputs {
    (
        average_volume(samples),
        volume_variation(samples, windows.volume),
        pitch_stability(samples, windows.stability),
        rhythm_consistency(samples, windows.rhythm),
    )
}

fn run_parallel(samples: &[f32], windows: Windows) -> MeterOutputs {
    let ((avg, variation), (stability, rhythm)) = rayon::join(
        || {
            rayon::join(
                || average_volume(samples),
                || volume_variation(samples, windows.volume),
            )
        },
        || {
            rayon::join(
                || pitch_stability(samples, windows.stability),
                || rhythm_consistency(samples, windows.rhythm),
            )
        },
    );
    (avg, variation, stability, rhythm)
}
