pub mod logger;
pub mod radial_distortion;
