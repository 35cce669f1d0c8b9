//! Utility modules
//!
//! Error types and result types shared across the crate.

pub mod error;

pub use self::error::{TranscodeError, TranscodeResult};
