//! Raster module
//!
//! Input pixel access, the processing region, and the output buffer.

mod source;
pub mod types;

pub use source::PixelSource;
pub use types::{OutputRaster, Raster, RasterView, Region};
