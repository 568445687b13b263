//! Overall loudness: mean absolute amplitude

use super::stats::round_to;

/// Mean of `|sample|` over the whole buffer, scaled by 100, one decimal
///
/// Returns `0.0` for an empty buffer.
///
/// # Example
///
/// ```
/// use stagecoach_dsp::features::loudness::average_volume;
///
/// assert_eq!(average_volume(&[0.5, -0.5, 0.25, -0.25]), 37.5);
/// assert_eq!(average_volume(&[]), 0.0);
/// ```
pub fn average_volume(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        log::warn!("Average volume of an empty buffer, falling back to 0.0");
        return 0.0;
    }

    let sum_abs: f64 = samples.iter().map(|&s| (s as f64).abs()).sum();
    let mean_abs = sum_abs / samples.len() as f64;

    round_to(mean_abs * 100.0, 1) as f32
}
