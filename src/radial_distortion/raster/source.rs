/// Read-only access to host pixels.
///
/// Coordinates are absolute image coordinates. Callers in this crate only
/// ever ask for `x < width()` and `y < height()`; implementations may panic
/// on anything else.
pub trait PixelSource: Sync {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channels(&self) -> usize;
    fn pixel(&self, x: usize, y: usize) -> &[u8];
}
