// Host-side tests for globe presets, marker styles and shader uniforms.

use globe_core::{
    hex_to_linear, Camera, GlobeConfig, MarkerKind, MarkerShape, OpacityRule, SceneUniforms,
};

#[test]
fn classic_preset_matches_reference_globe() {
    let cfg = GlobeConfig::classic();
    assert_eq!(cfg, GlobeConfig::default());
    assert_eq!(cfg.dot_count, 20_000);
    assert_eq!(cfg.dot_radius, 580.0);
    assert_eq!(cfg.globe_radius, 560.0);
    assert_eq!(cfg.notable_threshold, 120);
    assert!(cfg.fog.is_none());
    assert_eq!(cfg.palette.globe, 0x101c45);
    assert_eq!(cfg.palette.globe_opacity, 0.6);
}

#[test]
fn default_marker_styles() {
    let cfg = GlobeConfig::default();
    let ordinary = cfg.markers.for_kind(MarkerKind::Ordinary);
    assert_eq!(
        ordinary.shape,
        MarkerShape::Disc {
            radius: 2.0,
            segments: 5
        }
    );
    assert_eq!(ordinary.color, 0xf9c982);
    assert!(ordinary.lit);
    assert_eq!(ordinary.scale_multiplier, 1.0);

    let notable = cfg.markers.for_kind(MarkerKind::Notable);
    assert_eq!(notable.color, 0xb800c8);
    assert_eq!(notable.opacity, OpacityRule::Fixed(1.0));
    assert_eq!(notable.scale_multiplier, 4.0);
    assert!(!notable.lit);
}

#[test]
fn opacity_rules_resolve_rolls() {
    let random = OpacityRule::Random {
        base: 0.25,
        span: 0.5,
    };
    assert_eq!(random.resolve(0.0), 0.25);
    assert_eq!(random.resolve(0.5), 0.5);
    assert_eq!(OpacityRule::Fixed(0.8).resolve(0.9), 0.8);
}

#[test]
fn dense_preset_derives_globe_from_dot_radius() {
    let cfg = GlobeConfig::dense();
    assert_eq!(cfg.dot_count, 80_000);
    assert_eq!(cfg.globe_radius, cfg.dot_radius - 20.0);
    assert!(cfg.fog.is_some());
    assert!(matches!(cfg.markers.notable.shape, MarkerShape::Ring { .. }));
}

#[test]
fn builders_override_fields() {
    let cfg = GlobeConfig::default()
        .with_dot_count(10)
        .with_radius(10.0)
        .with_notable_threshold(5)
        .with_damping(2.0);
    assert_eq!(cfg.dot_count, 10);
    assert_eq!(cfg.globe_radius, 0.0);
    assert_eq!(cfg.notable_threshold, 5);
    assert_eq!(cfg.orbit.damping_factor, Some(1.0));
}

#[test]
fn hex_colors_are_decoded_to_linear() {
    assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = hex_to_linear(0xffffff);
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    // sRGB mid-grey is darker in linear space
    let grey = hex_to_linear(0x808080);
    assert!((grey[0] - 0.2158).abs() < 1e-3);
}

#[test]
fn uniforms_pack_rotation_palette_and_fog() {
    let cfg = GlobeConfig::default();
    let cam = Camera::from_config(&cfg.camera, cfg.camera.position, 1.5);
    let u = SceneUniforms::new(&cfg, &cam, 1.25);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 192);
    assert_eq!(u.group[0], 1.25);
    assert_eq!(u.globe_color[3], 0.6);
    assert_eq!(u.sky[3], 1.8);
    assert_eq!(u.ambient[3], 0.0);
    assert_eq!(u.fog_color[3], 0.0);
    assert_eq!(u.camera_pos, [0.0, 600.0, 1200.0, 1.0]);

    let dense = GlobeConfig::dense();
    let u = SceneUniforms::new(&dense, &cam, 0.0);
    assert_eq!(u.fog_color[3], 1.0);
    assert_eq!(u.fog_range[0], 1000.0);
    assert_eq!(u.fog_range[1], 2200.0);
}

#[test]
fn marker_instance_layout_matches_vertex_attributes() {
    assert_eq!(std::mem::size_of::<globe_core::MarkerInstance>(), 48);
    assert_eq!(std::mem::size_of::<globe_core::mesh::GlobeVertex>(), 24);
}
