use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::radial_distortion::{
    common::error::{DistortionError, Result},
    mapping::{Center, CoordinateMapper, DistortionParams, DistortionVariant, RadialMapper},
    raster::{OutputRaster, PixelSource, Region},
    resample::progress::{cancelled_quietly, report_quietly, ProgressSink},
    resample::timing::PipelineTimings,
    resample::types::{ResampleConfig, ResampleOutcome},
    sampling::sample_into,
};

pub struct Resampler<M: CoordinateMapper> {
    mapper: M,
    config: ResampleConfig,
}

impl Resampler<RadialMapper> {
    pub fn new(config: ResampleConfig) -> Self {
        Self {
            mapper: RadialMapper::new(config.variant, config.params),
            config,
        }
    }

    pub fn set_config(&mut self, config: ResampleConfig) {
        self.mapper = RadialMapper::new(config.variant, config.params);
        self.config = config;
    }
}

impl<M: CoordinateMapper> Resampler<M> {
    /// Uses `mapper` instead of the configured radial formula. The
    /// `variant` and `params` fields of `config` are then unused.
    pub fn with_custom(mapper: M, config: ResampleConfig) -> Self {
        Self { mapper, config }
    }

    fn validate<S: PixelSource + ?Sized>(&self, source: &S, region: Region) -> Result<()> {
        let (width, height) = (source.width(), source.height());
        if self.config.validate_dimensions && (width == 0 || height == 0) {
            return Err(DistortionError::InvalidDimensions(width, height));
        }

        let channels = source.channels();
        if channels == 0 {
            return Err(DistortionError::UnsupportedChannelCount(channels));
        }
        if let Some(max) = self.config.max_channels {
            if channels > max {
                warn!("Channel count {} exceeds maximum {}", channels, max);
                return Err(DistortionError::UnsupportedChannelCount(channels));
            }
        }

        region.validate_within(width, height)
    }

    /// Resamples every pixel of `region` and returns the new pixels.
    pub fn resample<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
        progress: &dyn ProgressSink,
    ) -> Result<ResampleOutcome> {
        let mut timings = PipelineTimings::new();
        self.run(source, region, progress, &mut timings)
    }

    pub fn resample_with_timings<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
        progress: &dyn ProgressSink,
    ) -> Result<(ResampleOutcome, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let outcome = self.run(source, region, progress, &mut timings)?;
        Ok((outcome, timings))
    }

    #[instrument(
        skip_all,
        fields(
            x1 = region.x1,
            y1 = region.y1,
            x2 = region.x2,
            y2 = region.y2,
            parallel = self.config.parallel
        )
    )]
    fn run<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
        progress: &dyn ProgressSink,
        timings: &mut PipelineTimings,
    ) -> Result<ResampleOutcome> {
        info!("Starting radial distortion");

        timings.time("validate_region", || self.validate(source, region))?;
        let mut output =
            timings.time("allocate_output", || OutputRaster::seeded_from(source, region));

        let center = Center::of_region(region, self.config.center_mode);
        debug!(
            cx = center.x,
            cy = center.y,
            channels = source.channels(),
            interpolation = ?self.config.interpolation,
            "Resampling region"
        );

        let rows_completed = timings.time("resample_rows", || {
            if region.is_empty() {
                region.height()
            } else if self.config.parallel {
                self.resample_parallel(source, region, center, &mut output, progress)
            } else {
                self.resample_sequential(source, region, center, &mut output, progress)
            }
        });

        let cancelled = rows_completed < region.height();
        if cancelled {
            warn!(
                rows_completed,
                rows_total = region.height(),
                "Resampling cancelled; remaining rows keep source pixels"
            );
        } else {
            report_quietly(progress, 1.0);
            info!(
                width = region.width(),
                height = region.height(),
                ms = timings.total_duration().as_secs_f64() * 1000.0,
                "Radial distortion complete"
            );
        }

        Ok(ResampleOutcome {
            output,
            rows_completed,
            cancelled,
        })
    }

    fn resample_sequential<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
        center: Center,
        output: &mut OutputRaster,
        progress: &dyn ProgressSink,
    ) -> usize {
        let stride = output.row_stride();
        let total = region.height();
        let mut completed = 0;

        for (row_idx, row) in output.as_bytes_mut().chunks_exact_mut(stride).enumerate() {
            if cancelled_quietly(progress) {
                break;
            }
            self.resample_row(source, region, center, region.y1 + row_idx, row);
            completed += 1;
            self.report_rows(progress, completed, total);
        }

        completed
    }

    fn resample_parallel<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
        center: Center,
        output: &mut OutputRaster,
        progress: &dyn ProgressSink,
    ) -> usize {
        let stride = output.row_stride();
        let total = region.height();
        let completed = AtomicUsize::new(0);
        let stop = AtomicBool::new(false);

        output
            .as_bytes_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(row_idx, row)| {
                if stop.load(Ordering::Relaxed) {
                    return;
                }
                if cancelled_quietly(progress) {
                    stop.store(true, Ordering::Relaxed);
                    return;
                }
                self.resample_row(source, region, center, region.y1 + row_idx, row);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                self.report_rows(progress, done, total);
            });

        completed.into_inner()
    }

    #[inline]
    fn resample_row<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        region: Region,
        center: Center,
        y: usize,
        row: &mut [u8],
    ) {
        let channels = source.channels();
        let interpolation = self.config.interpolation;
        let j = y as f64;

        for (col, dst) in row.chunks_exact_mut(channels).enumerate() {
            let i = (region.x1 + col) as f64;
            let (sx, sy) = self.mapper.map(i, j, center);
            sample_into(source, region, sx, sy, interpolation, dst);
        }
    }

    fn report_rows(&self, progress: &dyn ProgressSink, done: usize, total: usize) {
        let every = self.config.progress_every;
        if every > 0 && done < total && done % every == 0 {
            report_quietly(progress, done as f64 / total as f64);
        }
    }

    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }
}

/// Applies a radial distortion to `region` of `input` with bilinear sampling.
pub fn apply_distortion<S: PixelSource + ?Sized>(
    input: &S,
    region: Region,
    params: &DistortionParams,
    variant: DistortionVariant,
    progress: &dyn ProgressSink,
) -> Result<OutputRaster> {
    let config = ResampleConfig::builder()
        .variant(variant)
        .params(*params)
        .build();
    let outcome = Resampler::new(config).resample(input, region, progress)?;
    Ok(outcome.output)
}
