//! Raster and region types

use crate::radial_distortion::common::error::{DistortionError, Result};
use crate::radial_distortion::raster::source::PixelSource;

/// Half-open processing rectangle `[x1, x2) x [y1, y2)` in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Region {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Region covering a whole `width x height` image.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> usize {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> usize {
        self.y2.saturating_sub(self.y1)
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// Checks ordering and that the rectangle fits inside a `width x height` raster.
    pub fn validate_within(&self, width: usize, height: usize) -> Result<()> {
        if self.x1 > self.x2 || self.y1 > self.y2 || self.x2 > width || self.y2 > height {
            return Err(DistortionError::InvalidRegion {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Sample count of a `width x height x channels` buffer, or `InvalidDimensions`
/// when it does not fit in `usize`.
fn sample_count(width: usize, height: usize, channels: usize) -> Result<usize> {
    if channels == 0 {
        return Err(DistortionError::UnsupportedChannelCount(channels));
    }
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(DistortionError::InvalidDimensions(width, height))
}

fn check_layout(width: usize, height: usize, channels: usize, len: usize) -> Result<()> {
    let expected = sample_count(width, height, channels)?;
    if len != expected {
        return Err(DistortionError::BufferSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Borrowed view over a host pixel buffer (row-major, interleaved channels).
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    width: usize,
    height: usize,
    channels: usize,
    data: &'a [u8],
}

impl<'a> RasterView<'a> {
    pub fn new(width: usize, height: usize, channels: usize, data: &'a [u8]) -> Result<Self> {
        check_layout(width, height, channels, data.len())?;
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

impl PixelSource for RasterView<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let offset = (y * self.width + x) * self.channels;
        &self.data[offset..offset + self.channels]
    }
}

/// Owned input raster.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        check_layout(width, height, channels, data.len())?;
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Builds a raster by evaluating `f(x, y, channel)` for every sample.
    pub fn from_fn<F>(width: usize, height: usize, channels: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let mut data = Vec::with_capacity(sample_count(width, height, channels)?);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push(f(x, y, c));
                }
            }
        }
        Self::new(width, height, channels, data)
    }

    pub fn view(&self) -> RasterView<'_> {
        RasterView {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: &self.data,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for Raster {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let offset = (y * self.width + x) * self.channels;
        &self.data[offset..offset + self.channels]
    }
}

/// Resampled pixels for a region. Addressed with absolute image coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRaster {
    region: Region,
    channels: usize,
    data: Vec<u8>,
}

impl OutputRaster {
    /// Allocates an output for `region`, seeded with the source pixels it covers.
    ///
    /// The region must already be validated against `source`.
    pub(crate) fn seeded_from<S: PixelSource + ?Sized>(source: &S, region: Region) -> Self {
        let channels = source.channels();
        let mut data = Vec::with_capacity(region.area() * channels);
        for y in region.y1..region.y2 {
            for x in region.x1..region.x2 {
                data.extend_from_slice(source.pixel(x, y));
            }
        }
        Self {
            region,
            channels,
            data,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Bytes per output row.
    pub fn row_stride(&self) -> usize {
        self.region.width() * self.channels
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if !self.region.contains(x, y) {
            return None;
        }
        let row = y - self.region.y1;
        let col = x - self.region.x1;
        Some((row * self.region.width() + col) * self.channels)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let offset = self.offset(x, y)?;
        Some(&self.data[offset..offset + self.channels])
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let offset = self.offset(x, y)?;
        let channels = self.channels;
        Some(&mut self.data[offset..offset + channels])
    }

    /// Writes one pixel. Returns `false` when `(x, y)` is outside the region
    /// or `pixel` has the wrong number of channels.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: &[u8]) -> bool {
        if pixel.len() != self.channels {
            return false;
        }
        match self.pixel_mut(x, y) {
            Some(dst) => {
                dst.copy_from_slice(pixel);
                true
            }
            None => false,
        }
    }

    /// Row `y` (absolute) of the region.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y < self.region.y1 || y >= self.region.y2 {
            return None;
        }
        let stride = self.row_stride();
        let start = (y - self.region.y1) * stride;
        Some(&self.data[start..start + stride])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_validation() {
        assert!(Region::new(0, 0, 10, 10).validate_within(10, 10).is_ok());
        assert!(Region::new(3, 3, 3, 3).validate_within(10, 10).is_ok());
        assert!(matches!(
            Region::new(5, 0, 4, 10).validate_within(10, 10),
            Err(DistortionError::InvalidRegion { .. })
        ));
        assert!(matches!(
            Region::new(0, 0, 10, 11).validate_within(10, 10),
            Err(DistortionError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn raster_layout_is_checked() {
        assert!(matches!(
            Raster::new(2, 2, 3, vec![0; 11]),
            Err(DistortionError::BufferSizeMismatch { expected: 12, actual: 11 })
        ));
        assert!(matches!(
            RasterView::new(2, 2, 0, &[]),
            Err(DistortionError::UnsupportedChannelCount(0))
        ));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        // side * side wraps to exactly zero
        let side = 1usize << (usize::BITS / 2);
        assert!(matches!(
            RasterView::new(side, side, 1, &[]),
            Err(DistortionError::InvalidDimensions(w, h)) if w == side && h == side
        ));
        assert!(matches!(
            RasterView::new(usize::MAX / 2, 1, 3, &[]),
            Err(DistortionError::InvalidDimensions(..))
        ));
        assert!(matches!(
            Raster::from_fn(usize::MAX, 2, 1, |_, _, _| 0),
            Err(DistortionError::InvalidDimensions(..))
        ));
    }

    #[test]
    fn raster_shape_is_read_only() {
        let raster = Raster::new(4, 3, 2, vec![0; 24]).unwrap();
        assert_eq!((raster.width(), raster.height(), raster.channels()), (4, 3, 2));

        let view = raster.view();
        assert_eq!((view.width(), view.height(), view.channels()), (4, 3, 2));
        assert!(matches!(
            Region::full(8, 3).validate_within(raster.width(), raster.height()),
            Err(DistortionError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn output_uses_absolute_coordinates() {
        let raster = Raster::from_fn(6, 5, 2, |x, y, c| (x * 10 + y + c * 100) as u8).unwrap();
        let region = Region::new(2, 1, 5, 4);
        let mut out = OutputRaster::seeded_from(&raster, region);

        assert_eq!(out.as_bytes().len(), 3 * 3 * 2);
        assert_eq!(out.pixel(2, 1), Some(&[21u8, 121][..]));
        assert_eq!(out.pixel(1, 1), None);
        assert_eq!(out.pixel(5, 3), None);

        assert!(out.set_pixel(4, 3, &[7, 8]));
        assert_eq!(out.pixel(4, 3), Some(&[7u8, 8][..]));
        assert!(!out.set_pixel(4, 3, &[7]));
        assert!(!out.set_pixel(0, 0, &[7, 8]));
        assert_eq!(out.row(3).map(|r| r.len()), Some(6));
    }
}
