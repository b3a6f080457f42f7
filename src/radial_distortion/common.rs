//! Common utilities module
//!
//! Shared error type used across the resampler.

pub mod error;

pub use error::{DistortionError, Result};
