//! Distortion parameter types

use crate::radial_distortion::raster::Region;

/// Default `K` for [`DistortionVariant::InverseScale`].
pub const DEFAULT_INVERSE_CONSTANT: f64 = 1000.0;

/// Which radial formula maps output pixels to source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistortionVariant {
    /// `z = 1 + a·r² + b·r⁴`, source = center + d·z
    #[default]
    DirectScale,
    /// `s = -K / (K + a·r² + b·r⁴)`, source = center + d·s
    InverseScale,
    /// `z = 1 + a·r² + b·r⁴`, source = center + (d / |d|)·z
    DirectionCosine,
}

/// Polynomial coefficients for the radial mapping.
///
/// Values are not range checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    /// Quadratic coefficient.
    pub a: f64,
    /// Quartic coefficient.
    pub b: f64,
    /// Radius normaliser. Ignored unless finite and positive.
    pub scale: f64,
    /// `K` of the inverse-scale formula.
    pub inverse_constant: f64,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            scale: 1.0,
            inverse_constant: DEFAULT_INVERSE_CONSTANT,
        }
    }
}

impl DistortionParams {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_inverse_constant(mut self, k: f64) -> Self {
        self.inverse_constant = k;
        self
    }

    /// Both polynomial coefficients are zero.
    pub fn is_identity(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Radius the polynomial is evaluated on.
    #[inline]
    pub(crate) fn normalized_radius(&self, radius: f64) -> f64 {
        if self.scale.is_finite() && self.scale > 0.0 {
            radius / self.scale
        } else {
            radius
        }
    }

    /// `a·r² + b·r⁴`
    #[inline]
    pub(crate) fn polynomial(&self, r: f64) -> f64 {
        let r2 = r * r;
        self.a * r2 + self.b * r2 * r2
    }
}

/// How the region midpoint is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterMode {
    /// `(x1 + x2) / 2` with integer division; always lands on a pixel.
    #[default]
    Integer,
    /// Exact midpoint, may fall between pixels.
    Exact,
}

/// Distortion center in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

impl Center {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn of_region(region: Region, mode: CenterMode) -> Self {
        match mode {
            CenterMode::Integer => Self::new(
                ((region.x1 + region.x2) / 2) as f64,
                ((region.y1 + region.y2) / 2) as f64,
            ),
            CenterMode::Exact => Self::new(
                (region.x1 + region.x2) as f64 / 2.0,
                (region.y1 + region.y2) as f64 / 2.0,
            ),
        }
    }
}
