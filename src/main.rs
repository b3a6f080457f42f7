use radial_distortion_rs::logger;
use radial_distortion_rs::radial_distortion::{
    DistortionParams, DistortionVariant, Raster, Region, ResampleConfig, Resampler,
};

use tracing::{debug, info, warn};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn checkerboard(width: usize, height: usize) -> anyhow::Result<Raster> {
    let raster = Raster::from_fn(width, height, 3, |x, y, c| {
        let cell = ((x / 32) + (y / 32)) % 2 == 0;
        match (cell, c) {
            (true, _) => 230,
            (false, 0) => (x * 255 / width) as u8,
            (false, 1) => (y * 255 / height) as u8,
            (false, _) => 40,
        }
    })?;
    Ok(raster)
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting radial distortion demo...");

    let input = checkerboard(WIDTH, HEIGHT)?;
    let region = Region::full(WIDTH, HEIGHT);
    let half_diagonal = ((WIDTH * WIDTH + HEIGHT * HEIGHT) as f64).sqrt() / 2.0;

    let runs = [
        (DistortionVariant::DirectScale, DistortionParams::new(0.12, 0.03)),
        (DistortionVariant::InverseScale, DistortionParams::new(-250.0, 40.0)),
        (DistortionVariant::DirectionCosine, DistortionParams::new(150.0, 60.0)),
    ];

    for (variant, params) in runs {
        let config = ResampleConfig::builder()
            .variant(variant)
            .params(params.with_scale(half_diagonal))
            .build();
        let resampler = Resampler::new(config);

        info!("Variant: {:?}", variant);

        let progress = |fraction: f64| debug!("progress {:.0}%", fraction * 100.0);
        match resampler.resample_with_timings(&input, region, &progress) {
            Ok((outcome, timings)) => {
                let changed = outcome
                    .output
                    .as_bytes()
                    .iter()
                    .zip(input.as_bytes())
                    .filter(|(a, b)| a != b)
                    .count();
                info!(
                    rows = outcome.rows_completed,
                    changed_samples = changed,
                    "Resampled {}x{} region",
                    region.width(),
                    region.height()
                );
                timings.log_summary();
            }
            Err(e) => warn!("Resampling failed: {}", e),
        }
    }

    Ok(())
}
