//! Configuration parameters for feature extraction
//!
//! The meters use two different window policies and they are kept apart on
//! purpose: the loudness-variation window is a fixed sample count, while the
//! stability and rhythm windows are durations converted to samples with the
//! buffer's own rate. At rates other than 44.1 kHz the loudness-variation
//! window therefore covers a different span of time.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Loudness-variation window, in samples (100 ms at 44.1 kHz)
pub const VOLUME_WINDOW_SAMPLES: usize = 4410;

/// Stability window duration in seconds. Trailing partial windows are dropped.
pub const STABILITY_WINDOW_SECONDS: f64 = 0.1;

/// Rhythm window duration in seconds. Trailing partial windows are kept.
pub const RHYTHM_WINDOW_SECONDS: f64 = 0.5;

/// Feature extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Window size for loudness variation, in samples (default: 4410)
    pub volume_window_samples: usize,

    /// Window duration for the stability proxy, in seconds (default: 0.1)
    pub stability_window_seconds: f64,

    /// Window duration for rhythm consistency, in seconds (default: 0.5)
    pub rhythm_window_seconds: f64,

    /// Run the four meters on the rayon pool instead of sequentially (default: false)
    ///
    /// Results are bit-identical either way.
    pub parallel_meters: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            volume_window_samples: VOLUME_WINDOW_SAMPLES,
            stability_window_seconds: STABILITY_WINDOW_SECONDS,
            rhythm_window_seconds: RHYTHM_WINDOW_SECONDS,
            parallel_meters: false,
        }
    }
}

impl AnalysisConfig {
    /// Check that every window parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` for a zero sample-count window or a
    /// window duration that is not a positive finite number.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.volume_window_samples == 0 {
            return Err(AnalysisError::InvalidInput(
                "Volume window must be > 0 samples".to_string(),
            ));
        }
        validate_duration("Stability window", self.stability_window_seconds)?;
        validate_duration("Rhythm window", self.rhythm_window_seconds)?;
        Ok(())
    }

    /// Stability window length in samples: `floor(sample_rate * stability_window_seconds)`
    ///
    /// Zero for sample rates below 10 Hz with the default duration.
    pub fn stability_window_samples(&self, sample_rate: u32) -> usize {
        seconds_to_samples(self.stability_window_seconds, sample_rate)
    }

    /// Rhythm window length in samples: `floor(sample_rate * rhythm_window_seconds)`
    pub fn rhythm_window_samples(&self, sample_rate: u32) -> usize {
        seconds_to_samples(self.rhythm_window_seconds, sample_rate)
    }
}

fn validate_duration(name: &str, seconds: f64) -> Result<(), AnalysisError> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "{} must be a positive duration, got {}",
            name, seconds
        )));
    }
    Ok(())
}

fn seconds_to_samples(seconds: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * seconds).floor() as usize
}
