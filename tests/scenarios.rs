use std::sync::Mutex;

use radial_distortion_rs::radial_distortion::{
    apply_distortion, CancelToken, DistortionError, DistortionParams, DistortionVariant,
    NoProgress, PixelSource, RasterView, Region, ResampleConfig, Resampler, WithCancel,
};

fn host_buffer(width: usize, height: usize, channels: usize) -> Vec<u8> {
    (0..width * height * channels)
        .map(|i| (i * 13 % 251) as u8)
        .collect()
}

#[test]
fn identity_over_host_buffer() {
    let data = host_buffer(10, 10, 1);
    let view = RasterView::new(10, 10, 1, &data).unwrap();

    let output = apply_distortion(
        &view,
        Region::full(10, 10),
        &DistortionParams::new(0.0, 0.0),
        DistortionVariant::DirectScale,
        &NoProgress,
    )
    .unwrap();

    assert_eq!(output.into_bytes(), data);
}

#[test]
fn sub_region_output_is_region_shaped() {
    let data = host_buffer(20, 15, 4);
    let view = RasterView::new(20, 15, 4, &data).unwrap();
    let region = Region::new(4, 3, 16, 12);

    let output = apply_distortion(
        &view,
        region,
        &DistortionParams::new(0.4, 0.1).with_scale(6.0),
        DistortionVariant::InverseScale,
        &NoProgress,
    )
    .unwrap();

    assert_eq!(output.region(), region);
    assert_eq!(output.channels(), 4);
    assert_eq!(output.as_bytes().len(), 12 * 9 * 4);
    assert_eq!(output.row_stride(), 12 * 4);
    assert!(output.pixel(3, 3).is_none());
    assert!(output.pixel(15, 11).is_some());
}

#[test]
fn center_of_odd_region_is_preserved() {
    let data = host_buffer(11, 11, 3);
    let view = RasterView::new(11, 11, 3, &data).unwrap();

    for variant in [
        DistortionVariant::DirectScale,
        DistortionVariant::InverseScale,
        DistortionVariant::DirectionCosine,
    ] {
        let output = apply_distortion(
            &view,
            Region::full(11, 11),
            &DistortionParams::new(3.0, -1.0).with_scale(5.0),
            variant,
            &NoProgress,
        )
        .unwrap();
        assert_eq!(output.pixel(5, 5), Some(view.pixel(5, 5)));
    }
}

#[test]
fn out_of_bounds_region_fails_before_processing() {
    let data = host_buffer(8, 8, 3);
    let view = RasterView::new(8, 8, 3, &data).unwrap();
    let calls = Mutex::new(0usize);
    let progress = |_fraction: f64| {
        *calls.lock().unwrap() += 1;
    };

    let err = apply_distortion(
        &view,
        Region::new(0, 0, 9, 8),
        &DistortionParams::default(),
        DistortionVariant::DirectScale,
        &progress,
    )
    .unwrap_err();

    assert_eq!(
        err,
        DistortionError::InvalidRegion {
            x1: 0,
            y1: 0,
            x2: 9,
            y2: 8,
            width: 8,
            height: 8,
        }
    );
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn mismatched_host_buffer_is_rejected() {
    let data = host_buffer(8, 8, 3);
    assert!(matches!(
        RasterView::new(8, 8, 4, &data),
        Err(DistortionError::BufferSizeMismatch { expected: 256, actual: 192 })
    ));
}

#[test]
fn cancelled_run_reports_partial_outcome() {
    let data = host_buffer(32, 32, 3);
    let view = RasterView::new(32, 32, 3, &data).unwrap();
    let token = CancelToken::new();
    let sink = WithCancel::new(NoProgress, token.clone());
    token.cancel();

    let outcome = Resampler::new(ResampleConfig::default())
        .resample(&view, Region::full(32, 32), &sink)
        .unwrap();

    assert!(outcome.cancelled);
    assert!(outcome.rows_completed < 32);
    assert_eq!(outcome.output.as_bytes(), &data[..]);
}
