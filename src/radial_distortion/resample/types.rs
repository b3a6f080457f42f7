//! Resampling configuration types

use crate::radial_distortion::mapping::{CenterMode, DistortionParams, DistortionVariant};
use crate::radial_distortion::raster::OutputRaster;
use crate::radial_distortion::sampling::Interpolation;

/// Configuration for a resampling run
#[derive(Debug, Clone)]
pub struct ResampleConfig {
    /// Radial formula
    pub variant: DistortionVariant,
    /// Polynomial coefficients
    pub params: DistortionParams,
    /// Bilinear or nearest sampling
    pub interpolation: Interpolation,
    /// Where the distortion center sits inside the region
    pub center_mode: CenterMode,
    /// Split rows across the rayon pool
    pub parallel: bool,
    /// Report progress after this many completed rows (0 disables intermediate reports)
    pub progress_every: usize,
    /// Reject zero-sized input rasters
    pub validate_dimensions: bool,
    /// Upper bound on accepted channel count
    pub max_channels: Option<usize>,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            variant: DistortionVariant::DirectScale,
            params: DistortionParams::default(),
            interpolation: Interpolation::Bilinear,
            center_mode: CenterMode::Integer,
            parallel: true,
            progress_every: 10,
            validate_dimensions: true,
            max_channels: None,
        }
    }
}

impl ResampleConfig {
    pub fn builder() -> ResampleConfigBuilder {
        ResampleConfigBuilder::default()
    }
}

/// Builder for ResampleConfig
#[derive(Default)]
pub struct ResampleConfigBuilder {
    variant: Option<DistortionVariant>,
    params: Option<DistortionParams>,
    interpolation: Option<Interpolation>,
    center_mode: Option<CenterMode>,
    parallel: Option<bool>,
    progress_every: Option<usize>,
    validate_dimensions: Option<bool>,
    max_channels: Option<Option<usize>>,
}

impl ResampleConfigBuilder {
    pub fn variant(mut self, variant: DistortionVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn params(mut self, params: DistortionParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    pub fn bilinear(mut self, enable: bool) -> Self {
        self.interpolation = Some(Interpolation::from_bilinear(enable));
        self
    }

    pub fn center_mode(mut self, mode: CenterMode) -> Self {
        self.center_mode = Some(mode);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn progress_every(mut self, rows: usize) -> Self {
        self.progress_every = Some(rows);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_channels(mut self, max: Option<usize>) -> Self {
        self.max_channels = Some(max);
        self
    }

    pub fn build(self) -> ResampleConfig {
        let default = ResampleConfig::default();
        ResampleConfig {
            variant: self.variant.unwrap_or(default.variant),
            params: self.params.unwrap_or(default.params),
            interpolation: self.interpolation.unwrap_or(default.interpolation),
            center_mode: self.center_mode.unwrap_or(default.center_mode),
            parallel: self.parallel.unwrap_or(default.parallel),
            progress_every: self.progress_every.unwrap_or(default.progress_every),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_channels: self.max_channels.unwrap_or(default.max_channels),
        }
    }
}

/// Result of a resampling run.
#[derive(Debug, Clone)]
pub struct ResampleOutcome {
    pub output: OutputRaster,
    /// Rows actually resampled. Equals the region height unless cancelled.
    pub rows_completed: usize,
    pub cancelled: bool,
}
