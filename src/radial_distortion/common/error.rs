use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistortionError {
    #[error("Invalid region ({x1}, {y1})-({x2}, {y2}) for {width}x{height} raster")]
    InvalidRegion {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        width: usize,
        height: usize,
    },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid raster dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),
}

pub type Result<T> = std::result::Result<T, DistortionError>;
