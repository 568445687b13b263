//! Rhythm consistency from windowed signal energy
//!
//! Algorithm:
//! 1. Split the buffer into consecutive windows (trailing partial window kept)
//! 2. Energy per window: sum of squared samples
//! 3. Population variance of the energies
//! 4. Score: `100 / (1 + variance)`, so zero variance maps to exactly 100
//!
//! Energies are sums, not means, so a shorter trailing window carries less
//! energy and lowers the score.

use super::stats::{population_variance, round_to};
use crate::io::sample_buffer::inclusive_windows;

/// Consistency score in (0, 100], one decimal
///
/// # Arguments
///
/// * `samples` - Mono samples
/// * `window_samples` - Window length in samples, usually `floor(sample_rate * 0.5)`
///
/// # Returns
///
/// `0.0` when there are no windows (empty buffer or zero window).
pub fn rhythm_consistency(samples: &[f32], window_samples: usize) -> f32 {
    let energies: Vec<f64> = inclusive_windows(samples, window_samples)
        .map(|window| window.iter().map(|&s| (s as f64) * (s as f64)).sum())
        .collect();

    let Some(variance) = population_variance(&energies) else {
        log::warn!(
            "Rhythm consistency over zero windows ({} samples, window={}), falling back to 0.0",
            samples.len(),
            window_samples
        );
        return 0.0;
    };

    log::trace!(
        "Rhythm consistency: {} windows, energy variance={:.6}",
        energies.len(),
        variance
    );

    round_to(100.0 / (1.0 + variance), 1) as f32
}
