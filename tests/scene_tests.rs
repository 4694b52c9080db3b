// Host-side tests for marker placement.

use globe_core::{
    build_globe, sample_points, GlobeConfig, HeatmapConfig, HeatmapSampler, MarkerKind,
    RasterImage,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_heatmap() -> HeatmapConfig {
    HeatmapConfig::default()
        .with_canvas(8, 4)
        .with_lookup(7.0, 3.0)
}

fn sampler_with(image: RasterImage) -> HeatmapSampler {
    let mut s = HeatmapSampler::new(small_heatmap());
    s.finish_load(Ok(image));
    s
}

/// Columns alternate between transparent, faint and strong alpha.
fn striped_image() -> RasterImage {
    let mut pixels = Vec::new();
    for _y in 0..4 {
        for x in 0..8u32 {
            let a = match x % 3 {
                0 => 0,
                1 => 60,
                _ => 200,
            };
            pixels.extend_from_slice(&[0, 0, 0, a]);
        }
    }
    RasterImage::new(8, 4, pixels).unwrap()
}

fn config(n: u32) -> GlobeConfig {
    GlobeConfig::default()
        .with_dot_count(n)
        .with_heatmap(small_heatmap())
}

#[test]
fn transparent_heatmap_places_no_markers() {
    let sampler = sampler_with(RasterImage::solid(8, 4, [255, 255, 255, 0]));
    let scene = build_globe(&config(500), &sampler, &mut StdRng::seed_from_u64(1));
    assert!(scene.markers.is_empty());
    assert!(scene.active.is_none());
    assert_eq!(scene.candidates, 501);
}

#[test]
fn failed_heatmap_places_no_markers() {
    let mut sampler = HeatmapSampler::new(small_heatmap());
    sampler.finish_load(Err(globe_core::GlobeError::EmptyImage));
    let scene = build_globe(&config(500), &sampler, &mut StdRng::seed_from_u64(1));
    assert!(scene.markers.is_empty());
}

#[test]
fn opaque_heatmap_marks_every_point_notable() {
    let sampler = sampler_with(RasterImage::solid(8, 4, [0, 0, 0, 255]));
    let scene = build_globe(&config(100), &sampler, &mut StdRng::seed_from_u64(7));
    assert_eq!(scene.markers.len(), 101);
    assert_eq!(scene.count(MarkerKind::Notable), 101);
    // the last visited index is 0
    let active = scene.active_marker().unwrap();
    assert_eq!(active.index, 0);
}

#[test]
fn markers_exist_exactly_where_intensity_is_positive() {
    let cfg = config(2_000);
    let sampler = sampler_with(striped_image());
    let scene = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(3));

    let expected: Vec<(u32, MarkerKind)> = sample_points(cfg.dot_count)
        .filter_map(|p| {
            let c = sampler.get_color(p.u, p.v);
            MarkerKind::classify(c, cfg.notable_threshold).map(|k| (p.index, k))
        })
        .collect();
    let actual: Vec<(u32, MarkerKind)> = scene.markers.iter().map(|m| (m.index, m.kind)).collect();
    assert_eq!(actual, expected);
    assert!(scene.count(MarkerKind::Ordinary) > 0);
    assert!(scene.count(MarkerKind::Notable) > 0);
}

#[test]
fn notable_threshold_is_strictly_greater_than() {
    assert_eq!(MarkerKind::classify(0, 120), None);
    assert_eq!(MarkerKind::classify(1, 120), Some(MarkerKind::Ordinary));
    assert_eq!(MarkerKind::classify(120, 120), Some(MarkerKind::Ordinary));
    assert_eq!(MarkerKind::classify(121, 120), Some(MarkerKind::Notable));
}

#[test]
fn markers_sit_on_sphere_and_face_its_center() {
    let cfg = config(1_000);
    let sampler = sampler_with(striped_image());
    let scene = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(5));
    for m in &scene.markers {
        assert!((m.position.length() - cfg.dot_radius).abs() < 0.05);
        let inward = -m.position.normalize();
        assert!(m.normal.dot(inward) > 0.9999);
    }
}

#[test]
fn scale_and_opacity_follow_marker_style() {
    let cfg = config(3_000);
    let sampler = sampler_with(striped_image());
    let scene = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(11));
    for m in &scene.markers {
        match m.kind {
            MarkerKind::Ordinary => {
                assert!((0.5..=1.5).contains(&m.scale), "scale {}", m.scale);
                assert!((0.25..=0.75).contains(&m.opacity), "opacity {}", m.opacity);
            }
            MarkerKind::Notable => {
                assert!((2.0..=6.0).contains(&m.scale), "scale {}", m.scale);
                assert_eq!(m.opacity, 1.0);
            }
        }
    }
}

#[test]
fn same_seed_builds_the_same_globe() {
    let cfg = config(1_500);
    let sampler = sampler_with(striped_image());
    let a = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(99));
    let b = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.markers, b.markers);
    assert_eq!(a.active, b.active);
}

#[test]
fn active_marker_is_last_notable_visited() {
    let cfg = config(1_500);
    let sampler = sampler_with(striped_image());
    let scene = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(2));
    let last_notable = scene
        .markers
        .iter()
        .rposition(|m| m.kind == MarkerKind::Notable)
        .unwrap();
    assert_eq!(scene.active.map(|h| h.index()), Some(last_notable));
    assert_eq!(scene.active_marker().unwrap().kind, MarkerKind::Notable);
}

#[test]
fn instances_split_by_kind_and_carry_marker_data() {
    let cfg = config(1_000);
    let sampler = sampler_with(striped_image());
    let scene = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(4));
    let ordinary = scene.instances(&cfg, MarkerKind::Ordinary);
    let notable = scene.instances(&cfg, MarkerKind::Notable);
    assert_eq!(ordinary.len() + notable.len(), scene.markers.len());
    let total: usize = MarkerKind::ALL.iter().map(|k| scene.count(*k)).sum();
    assert_eq!(total, scene.markers.len());

    let first = scene
        .markers
        .iter()
        .find(|m| m.kind == MarkerKind::Ordinary)
        .unwrap();
    assert_eq!(ordinary[0].position, first.position.to_array());
    assert_eq!(ordinary[0].scale, first.scale);
    assert_eq!(ordinary[0].color[3], first.opacity);
    assert_eq!(ordinary[0].shading[0], 1.0);
    assert_eq!(notable[0].shading[0], 0.0);
}

#[test]
fn world_position_applies_group_rotation() {
    let cfg = config(1_000);
    let sampler = sampler_with(striped_image());
    let mut scene = build_globe(&cfg, &sampler, &mut StdRng::seed_from_u64(8));
    let handle = scene.active.unwrap();
    let local = scene.marker(handle).unwrap().position;

    scene.rotation.advance(5_000.0);
    let world = scene.world_position(handle).unwrap();
    let expected = glam::Mat4::from_rotation_y(scene.rotation.angle() as f32).transform_point3(local);
    assert!((world - expected).length() < 1e-3);
    // rotation about Y keeps height and radius
    assert!((world.y - local.y).abs() < 1e-3);
    assert!((world.length() - local.length()).abs() < 1e-3);
}
