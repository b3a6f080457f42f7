use crate::radial_distortion::raster::{PixelSource, Region};

/// Reconstruction filter used when reading the source at a real coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Blend the four surrounding pixels.
    #[default]
    Bilinear,
    /// Take the top-left neighbour as is.
    Nearest,
}

impl Interpolation {
    pub fn from_bilinear(bilinear: bool) -> Self {
        if bilinear {
            Interpolation::Bilinear
        } else {
            Interpolation::Nearest
        }
    }
}

/// Inclusive clamp bounds on one axis: `[lo, hi]`.
#[derive(Debug, Clone, Copy)]
struct Axis {
    lo: i64,
    hi: i64,
}

impl Axis {
    fn new(start: usize, end: usize) -> Self {
        Self {
            lo: start as i64,
            hi: end as i64 - 1,
        }
    }

    /// Pulls `v` into `[lo - 1, hi + 1]` so the integer conversion below is
    /// well defined. Every coordinate outside `[lo, hi]` already samples the
    /// edge pixel, so this does not change the result.
    #[inline]
    fn guard(&self, v: f64) -> f64 {
        if v.is_nan() {
            self.lo as f64
        } else {
            v.clamp((self.lo - 1) as f64, (self.hi + 1) as f64)
        }
    }

    #[inline]
    fn clamp(&self, v: i64) -> usize {
        v.clamp(self.lo, self.hi) as usize
    }

    /// Floor of `v`, its fractional part, and the two clamped neighbours.
    #[inline]
    fn split(&self, v: f64) -> (usize, usize, f64) {
        let v = self.guard(v);
        let f = v.floor();
        let base = f as i64;
        (self.clamp(base), self.clamp(base + 1), v - f)
    }
}

#[inline]
fn lerp(u: f64, v: f64, t: f64) -> f64 {
    u + (v - u) * t
}

/// Samples `source` at `(sx, sy)` and writes one pixel into `out`.
///
/// Neighbour coordinates are clamped to the region; `out.len()` must equal
/// the source channel count and `region` must lie inside the source. An
/// empty region has no pixel to sample and leaves `out` untouched.
pub fn sample_into<S: PixelSource + ?Sized>(
    source: &S,
    region: Region,
    sx: f64,
    sy: f64,
    interpolation: Interpolation,
    out: &mut [u8],
) {
    if region.is_empty() {
        return;
    }

    let x_axis = Axis::new(region.x1, region.x2);
    let y_axis = Axis::new(region.y1, region.y2);

    let (x0, x1, ox) = x_axis.split(sx);
    let (y0, y1, oy) = y_axis.split(sy);

    let p00 = source.pixel(x0, y0);

    if interpolation == Interpolation::Nearest {
        out.copy_from_slice(p00);
        return;
    }

    let p10 = source.pixel(x1, y0);
    let p01 = source.pixel(x0, y1);
    let p11 = source.pixel(x1, y1);

    for (c, dst) in out.iter_mut().enumerate() {
        let top = lerp(p00[c] as f64, p10[c] as f64, ox);
        let bottom = lerp(p01[c] as f64, p11[c] as f64, ox);
        *dst = lerp(top, bottom, oy).clamp(0.0, 255.0) as u8;
    }
}
