//! Loudness variation: spread of windowed loudness
//!
//! Windows are a fixed number of samples, independent of the sample rate.
//! The trailing partial window is kept and averaged over its own length.

use super::stats::{population_variance, round_to};
use crate::io::sample_buffer::inclusive_windows;

/// Population standard deviation of per-window mean absolute amplitude, three decimals
///
/// # Arguments
///
/// * `samples` - Mono samples
/// * `window_samples` - Window length in samples (default 4410)
///
/// # Returns
///
/// `0.0` for an empty buffer or a zero window. A buffer that fits in a
/// single window also yields `0.0`, since one value has no variance.
pub fn volume_variation(samples: &[f32], window_samples: usize) -> f32 {
    let window_loudness: Vec<f64> = inclusive_windows(samples, window_samples)
        .map(|window| {
            let sum_abs: f64 = window.iter().map(|&s| (s as f64).abs()).sum();
            sum_abs / window.len() as f64
        })
        .collect();

    let Some(variance) = population_variance(&window_loudness) else {
        log::warn!(
            "Volume variation over zero windows ({} samples, window={}), falling back to 0.0",
            samples.len(),
            window_samples
        );
        return 0.0;
    };

    log::trace!(
        "Volume variation: {} windows, variance={:.6}",
        window_loudness.len(),
        variance
    );

    round_to(variance.sqrt(), 3) as f32
}
