//! Guarded statistics shared by the meters

/// Arithmetic mean, or `None` for an empty input
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by `n`, not `n - 1`), or `None` for an empty input
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|&v| (v - avg) * (v - avg)).sum();
    Some(sum_sq / values.len() as f64)
}

/// Round to a fixed number of decimal places, halves away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
