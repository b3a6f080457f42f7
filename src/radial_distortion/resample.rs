//! Region driver module
//!
//! Validates the request, walks the region row by row (optionally across the
//! rayon pool), and reports progress back to the host.

mod pipeline;
mod progress;
mod timing;
pub mod types;


pub use pipeline::{apply_distortion, Resampler};
pub use progress::{CancelToken, NoProgress, ProgressSink, WithCancel};
pub use timing::PipelineTimings;
pub use types::{ResampleConfig, ResampleConfigBuilder, ResampleOutcome};
