//! Pitch stability proxy from windowed zero-crossings
//!
//! This is not pitch estimation. A window counts as "stable" when its signal
//! changes sign at least once, which separates voiced or tonal content from
//! digital silence and DC-like segments.
//!
//! Only full windows are scanned. The denominator is `floor(len / window)`,
//! computed from the sample count on its own rather than from the scan.

use super::stats::round_to;
use crate::io::sample_buffer::exclusive_windows;

/// Count sign changes between consecutive samples
///
/// A sample of exactly zero (including `-0.0`) counts as non-negative.
///
/// # Example
///
/// ```
/// use stagecoach_dsp::features::stability::count_zero_crossings;
///
/// assert_eq!(count_zero_crossings(&[1.0, -1.0, 1.0]), 2);
/// assert_eq!(count_zero_crossings(&[0.0, 0.5, 0.0]), 0);
/// assert_eq!(count_zero_crossings(&[-0.5, 0.0]), 1);
/// ```
pub fn count_zero_crossings(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count()
}

/// Percentage of window slots whose window has at least one zero-crossing, one decimal
///
/// # Arguments
///
/// * `samples` - Mono samples
/// * `window_samples` - Window length in samples, usually `floor(sample_rate * 0.1)`
///
/// # Returns
///
/// Value in [0, 100]. `0.0` when the window is zero (sample rate below 10 Hz
/// at the default duration) or the buffer is shorter than one window.
pub fn pitch_stability(samples: &[f32], window_samples: usize) -> f32 {
    if window_samples == 0 {
        log::warn!("Stability window is 0 samples, falling back to 0.0");
        return 0.0;
    }

    let total_slots = samples.len() / window_samples;
    if total_slots == 0 {
        log::warn!(
            "Buffer of {} samples is shorter than one stability window ({}), falling back to 0.0",
            samples.len(),
            window_samples
        );
        return 0.0;
    }

    let stable_windows = exclusive_windows(samples, window_samples)
        .filter(|window| count_zero_crossings(window) > 0)
        .count();

    log::trace!(
        "Pitch stability: {}/{} stable windows",
        stable_windows,
        total_slots
    );

    round_to(stable_windows as f64 / total_slots as f64 * 100.0, 1) as f32
}
