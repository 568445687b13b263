//! Analysis result type

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar descriptors for one recording
///
/// Every field is already rounded to its reporting precision. The value is
/// constructed once per analysis and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Duration in seconds, one decimal
    pub duration_seconds: f32,

    /// Mean absolute amplitude scaled to [0, 100], one decimal
    pub avg_volume: f32,

    /// Population std-dev of windowed loudness (>= 0), three decimals
    pub volume_variation: f32,

    /// Percentage of 100 ms windows with zero-crossings, [0, 100], one decimal
    pub pitch_stability: f32,

    /// Inverse-variance score of 500 ms window energies, (0, 100], one decimal
    ///
    /// `0.0` only for an empty buffer.
    pub rhythm_consistency: f32,
}

impl AnalysisResult {
    /// Plain-text summary line handed to downstream prompt builders
    ///
    /// # Example
    ///
    /// ```
    /// use stagecoach_dsp::AnalysisResult;
    ///
    /// let result = AnalysisResult {
    ///     duration_seconds: 12.5,
    ///     avg_volume: 23.4,
    ///     volume_variation: 0.051,
    ///     pitch_stability: 87.5,
    ///     rhythm_consistency: 99.9,
    /// };
    /// assert_eq!(
    ///     result.descriptor_line(),
    ///     "Audio: 12.5s, Volume: 23.4%, Variation: 0.051, Stability: 87.5%, Rhythm: 99.9%"
    /// );
    /// ```
    pub fn descriptor_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Audio: {:.1}s, Volume: {:.1}%, Variation: {:.3}, Stability: {:.1}%, Rhythm: {:.1}%",
            self.duration_seconds,
            self.avg_volume,
            self.volume_variation,
            self.pitch_stability,
            self.rhythm_consistency
        )
    }
}
