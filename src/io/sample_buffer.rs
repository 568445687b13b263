//! Immutable mono sample buffer and borrowed windowing
//!
//! A `SampleBuffer` is the single input every meter reads. Windows are handed
//! out as sub-slices of the shared sample vector so that no meter copies the
//! buffer, which matters for multi-minute recordings in the millions of samples.

use crate::error::AnalysisError;

/// Decoded, single-channel audio plus the rate it was captured at
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Sample data, nominally in [-1.0, 1.0]
    samples: Vec<f32>,
    /// Samples per second, always > 0
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a validated sample buffer
    ///
    /// An empty sample vector is accepted: every meter defines a `0.0`
    /// fallback for it.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `sample_rate` is zero or any
    /// sample is NaN or infinite.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }

        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::InvalidInput(format!(
                "Non-finite sample at index {}",
                index
            )));
        }

        if samples.is_empty() {
            log::warn!("Sample buffer is empty, all windowed metrics will fall back to 0.0");
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Borrow the sample data
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds, always derived from the sample count and rate
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Consecutive windows of `window_samples`, including a shorter trailing window
    ///
    /// Yields nothing when `window_samples` is zero.
    pub fn windows(&self, window_samples: usize) -> impl Iterator<Item = &[f32]> + '_ {
        inclusive_windows(&self.samples, window_samples)
    }

    /// Consecutive full windows of `window_samples`; a trailing remainder is skipped
    ///
    /// Yields nothing when `window_samples` is zero.
    pub fn full_windows(&self, window_samples: usize) -> impl Iterator<Item = &[f32]> + '_ {
        exclusive_windows(&self.samples, window_samples)
    }

    /// Take ownership of the sample data
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

/// Windows over a slice keeping the trailing partial window
pub(crate) fn inclusive_windows(samples: &[f32], window_samples: usize) -> std::slice::Chunks<'_, f32> {
    // `chunks(0)` panics; an empty slice yields no chunks at all
    if window_samples == 0 {
        return samples[..0].chunks(1);
    }
    samples.chunks(window_samples)
}

/// Windows over a slice dropping the trailing partial window
pub(crate) fn exclusive_windows(
    samples: &[f32],
    window_samples: usize,
) -> std::slice::ChunksExact<'_, f32> {
    if window_samples == 0 {
        return samples[..0].chunks_exact(1);
    }
    samples.chunks_exact(window_samples)
}
