//! Feature extraction modules
//!
//! The four meters share one borrowed sample slice and have no data
//! dependency on each other:
//! - Loudness (mean absolute amplitude)
//! - Loudness variation (std-dev of windowed loudness)
//! - Stability proxy (share of windows with zero-crossings)
//! - Rhythm consistency (inverse variance of windowed energy)
//!
//! Every meter guards its divisions and returns `0.0` where the arithmetic
//! would otherwise be undefined.

pub mod loudness;
pub mod loudness_variation;
pub mod rhythm;
pub mod stability;
pub mod stats;
