//! Analysis orchestration and result types
//!
//! - Feature extractor (runs the meters over one buffer)
//! - Result type

pub mod extractor;
pub mod result;
