use crate::radial_distortion::mapping::types::Center;

/// Maps an output pixel `(i, j)` to the source coordinate it is sampled from.
///
/// Implementations must be pure: the result may depend only on the
/// arguments and the mapper's own immutable state.
pub trait CoordinateMapper: Sync {
    fn map(&self, i: f64, j: f64, center: Center) -> (f64, f64);
}
