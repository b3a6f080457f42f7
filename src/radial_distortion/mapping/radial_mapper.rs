//! Polynomial radial mapping.
//!
//! All three formulas share the same radius computation
//! `r = |(i, j) - center| / scale` and differ only in how the polynomial
//! `a·r² + b·r⁴` turns into a displacement.

use crate::radial_distortion::mapping::mapper::CoordinateMapper;
use crate::radial_distortion::mapping::types::{Center, DistortionParams, DistortionVariant};

/// Radial distortion selected by a [`DistortionVariant`] tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialMapper {
    pub variant: DistortionVariant,
    pub params: DistortionParams,
}

impl RadialMapper {
    pub fn new(variant: DistortionVariant, params: DistortionParams) -> Self {
        Self { variant, params }
    }
}

impl CoordinateMapper for RadialMapper {
    #[inline]
    fn map(&self, i: f64, j: f64, center: Center) -> (f64, f64) {
        let dx = i - center.x;
        let dy = j - center.y;

        let (sx, sy) = match self.variant {
            DistortionVariant::DirectScale => direct_scale(&self.params, dx, dy, center),
            DistortionVariant::InverseScale => inverse_scale(&self.params, dx, dy, center),
            DistortionVariant::DirectionCosine => direction_cosine(&self.params, dx, dy, center),
        };

        if sx.is_finite() && sy.is_finite() {
            (sx, sy)
        } else {
            (center.x, center.y)
        }
    }
}

fn direct_scale(params: &DistortionParams, dx: f64, dy: f64, center: Center) -> (f64, f64) {
    let r = params.normalized_radius(dx.hypot(dy));
    let z = 1.0 + params.polynomial(r);
    (center.x + dx * z, center.y + dy * z)
}

fn inverse_scale(params: &DistortionParams, dx: f64, dy: f64, center: Center) -> (f64, f64) {
    let k = params.inverse_constant;
    let r = params.normalized_radius(dx.hypot(dy));
    let denom = k + params.polynomial(r);
    if denom == 0.0 {
        return (center.x, center.y);
    }
    let s = -k / denom;
    (center.x + dx * s, center.y + dy * s)
}

fn direction_cosine(params: &DistortionParams, dx: f64, dy: f64, center: Center) -> (f64, f64) {
    let radius = dx.hypot(dy);
    if radius == 0.0 {
        return (center.x, center.y);
    }
    let z = 1.0 + params.polynomial(params.normalized_radius(radius));
    (center.x + dx / radius * z, center.y + dy / radius * z)
}
