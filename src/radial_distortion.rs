//! Radial distortion resampler
//!
//! Maps every pixel of a region through a polynomial radial distortion and
//! resamples the source with bilinear or nearest interpolation. The host
//! provides pixels through [`PixelSource`] and receives an [`OutputRaster`]
//! shaped like the requested region.

pub mod common;
pub mod mapping;
pub mod raster;
pub mod resample;
pub mod sampling;

pub use common::{
    DistortionError,
    Result,
};

pub use raster::{
    OutputRaster,
    PixelSource,
    Raster,
    RasterView,
    Region,
};

pub use mapping::{
    Center,
    CenterMode,
    CoordinateMapper,
    DistortionParams,
    DistortionVariant,
    RadialMapper,
};

pub use sampling::Interpolation;

pub use resample::{
    apply_distortion,
    CancelToken,
    NoProgress,
    PipelineTimings,
    ProgressSink,
    ResampleConfig,
    ResampleConfigBuilder,
    ResampleOutcome,
    Resampler,
    WithCancel,
};
