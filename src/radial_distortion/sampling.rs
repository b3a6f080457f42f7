//! Source sampling module

mod bilinear;

pub use bilinear::{sample_into, Interpolation};
