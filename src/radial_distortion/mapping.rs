//! Coordinate mapping module
//!
//! Turns an output pixel position into the source coordinate it samples.

mod mapper;
mod radial_mapper;
pub mod types;

pub use mapper::CoordinateMapper;
pub use radial_mapper::RadialMapper;
pub use types::{Center, CenterMode, DistortionParams, DistortionVariant, DEFAULT_INVERSE_CONSTANT};
