// Host-side tests for heatmap sampling and load-state handling.

use globe_core::{
    GlobeError, Heatmap, HeatmapConfig, HeatmapSampler, HeatmapState, IntensityChannel,
    RasterImage,
};

// 4x4 canvas looked up through a 3x3 window, like the full-size 3840x2160
// canvas read through 2754x1397.
fn small_config() -> HeatmapConfig {
    HeatmapConfig::default()
        .with_canvas(4, 4)
        .with_lookup(3.0, 3.0)
}

/// 4x4 image whose alpha encodes the pixel position as `10 * y + x + 1`.
fn indexed_image() -> RasterImage {
    let mut pixels = Vec::new();
    for y in 0..4u8 {
        for x in 0..4u8 {
            pixels.extend_from_slice(&[x, y, 0, 10 * y + x + 1]);
        }
    }
    RasterImage::new(4, 4, pixels).unwrap()
}

fn ready_sampler(config: HeatmapConfig, image: RasterImage) -> HeatmapSampler {
    let mut s = HeatmapSampler::new(config);
    assert_eq!(s.finish_load(Ok(image)), HeatmapState::Ready);
    s
}

#[test]
fn default_config_uses_full_canvas_and_smaller_lookup() {
    let cfg = HeatmapConfig::default();
    assert_eq!((cfg.canvas_width, cfg.canvas_height), (3840, 2160));
    assert_eq!((cfg.lookup_width, cfg.lookup_height), (2754.0, 1397.0));
    assert_eq!(cfg.channel, IntensityChannel::Alpha);
    assert_eq!(cfg.source, "./map.png");
}

#[test]
fn lookup_scales_by_lookup_size_and_truncates() {
    let s = ready_sampler(small_config(), indexed_image());
    assert_eq!(s.get_color(0.0, 0.0), 1);
    // 0.5 * 3 = 1.5 -> pixel 1
    assert_eq!(s.get_color(0.5, 0.5), 12);
    // 0.99 * 3 = 2.97 -> pixel 2
    assert_eq!(s.get_color(0.99, 0.99), 23);
    // 1.0 * 3 = 3 -> pixel 3, the last column and row
    assert_eq!(s.get_color(1.0, 1.0), 34);
}

#[test]
fn coordinates_are_clamped_to_unit_range() {
    let s = ready_sampler(small_config(), indexed_image());
    assert_eq!(s.get_color(-5.0, -0.1), s.get_color(0.0, 0.0));
    assert_eq!(s.get_color(7.0, 2.0), s.get_color(1.0, 1.0));
    assert_eq!(s.get_color(f64::NAN, 0.0), s.get_color(0.0, 0.0));
}

#[test]
fn full_size_lookup_never_reaches_right_or_bottom_of_canvas() {
    let cfg = HeatmapConfig::default();
    // Opaque only beyond the lookup window
    let mut pixels = vec![0u8; 3840 * 2160 * 4];
    for y in 0..2160usize {
        for x in 0..3840usize {
            if x > 2754 || y > 1397 {
                pixels[(y * 3840 + x) * 4 + 3] = 255;
            }
        }
    }
    let image = RasterImage::new(3840, 2160, pixels).unwrap();
    let s = ready_sampler(cfg, image);
    for &(x, y) in &[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.7, 0.3)] {
        assert_eq!(s.get_color(x, y), 0);
    }
}

#[test]
fn smaller_image_is_blitted_at_origin_and_rest_is_transparent() {
    let s = ready_sampler(small_config(), RasterImage::solid(2, 2, [9, 9, 9, 200]));
    assert_eq!(s.get_color(0.0, 0.0), 200);
    assert_eq!(s.get_color(0.4, 0.4), 200);
    // pixel (3, 3) lies outside the 2x2 image
    assert_eq!(s.get_color(1.0, 1.0), 0);
    assert_eq!(s.get_color(1.0, 0.0), 0);
}

#[test]
fn larger_image_is_clipped_to_canvas() {
    let cfg = small_config().with_canvas(2, 2).with_lookup(1.0, 1.0);
    let heatmap = Heatmap::from_image(&cfg, &indexed_image()).unwrap();
    assert_eq!(heatmap.dimensions(), (2, 2));
    assert_eq!(heatmap.get_color(0.0, 0.0), 1);
    assert_eq!(heatmap.get_color(1.0, 1.0), 12);
}

#[test]
fn lookup_beyond_canvas_reads_zero() {
    let cfg = small_config().with_lookup(10.0, 10.0);
    let s = ready_sampler(cfg, RasterImage::solid(4, 4, [0, 0, 0, 255]));
    assert_eq!(s.get_color(0.2, 0.2), 255);
    assert_eq!(s.get_color(1.0, 1.0), 0);
}

#[test]
fn rgb_sum_channel_adds_color_components() {
    let cfg = small_config().with_channel(IntensityChannel::RgbSum);
    let s = ready_sampler(cfg, RasterImage::solid(4, 4, [100, 200, 255, 0]));
    assert_eq!(s.get_color(0.5, 0.5), 555);
}

#[test]
fn pending_sampler_reports_zero() {
    let s = HeatmapSampler::new(small_config());
    assert_eq!(s.state(), HeatmapState::Pending);
    assert_eq!(s.get_color(0.5, 0.5), 0);
    assert!(s.error().is_none());
}

#[test]
fn failed_load_keeps_reporting_zero() {
    let mut s = HeatmapSampler::new(small_config());
    let state = s.finish_load(Err(GlobeError::ImageLoad("404".into())));
    assert_eq!(state, HeatmapState::Failed);
    assert_eq!(s.get_color(0.0, 0.0), 0);
    assert_eq!(s.get_color(1.0, 1.0), 0);
    assert_eq!(s.error(), Some(&GlobeError::ImageLoad("404".into())));
}

#[test]
fn raster_rejects_mismatched_buffers() {
    assert_eq!(
        RasterImage::new(2, 2, vec![0; 15]),
        Err(GlobeError::ImageSize {
            expected: 16,
            actual: 15
        })
    );
    assert_eq!(RasterImage::new(0, 2, vec![]), Err(GlobeError::EmptyImage));
}

#[test]
fn empty_canvas_is_an_error() {
    let cfg = small_config().with_canvas(0, 4);
    let err = Heatmap::from_image(&cfg, &RasterImage::solid(1, 1, [0; 4])).unwrap_err();
    assert_eq!(err, GlobeError::EmptyImage);
}

#[test]
fn errors_render_readable_messages() {
    let msg = GlobeError::ImageSize {
        expected: 16,
        actual: 15,
    }
    .to_string();
    assert!(msg.contains("16") && msg.contains("15"), "{msg}");
}
