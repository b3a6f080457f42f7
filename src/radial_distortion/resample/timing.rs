use std::time::{Duration, Instant};

use tracing::info;

/// Wall-clock duration of each stage of one resampling run, in run order.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    stages: Vec<(&'static str, Duration)>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` and records its duration under `stage`.
    pub(crate) fn time<T>(&mut self, stage: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.stages.push((stage, start.elapsed()));
        value
    }

    pub fn stages(&self) -> &[(&'static str, Duration)] {
        &self.stages
    }

    pub fn stage(&self, name: &str) -> Option<Duration> {
        self.stages
            .iter()
            .find(|(stage, _)| *stage == name)
            .map(|&(_, duration)| duration)
    }

    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|&(_, duration)| duration).sum()
    }

    pub fn log_summary(&self) {
        let total = self.total_duration().as_secs_f64();
        for &(stage, duration) in &self.stages {
            let percent = if total > 0.0 {
                duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            info!(stage, ms = duration.as_secs_f64() * 1000.0, percent, "Stage timing");
        }
        info!(ms = total * 1000.0, "Total resample time");
    }
}
