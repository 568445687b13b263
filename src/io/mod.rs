//! Audio I/O modules
//!
//! Sample buffering, plus file decoding using Symphonia when the `decode`
//! feature is enabled.

#[cfg(feature = "decode")]
pub mod decoder;
pub mod sample_buffer;
