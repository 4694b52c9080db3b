//! Globe configuration.
//!
//! One builder covers every globe variant; the variants only differ in the
//! values held here (dot count, radii, palette, threshold, marker styles).

use crate::constants::*;
use crate::heatmap::HeatmapConfig;
use crate::marker::{MarkerShape, MarkerStyles};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub globe: u32,
    pub globe_opacity: f32,
    pub sky: u32,
    pub ground: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    pub hemisphere_intensity: f32,
    pub ambient_color: u32,
    pub ambient_intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fog {
    pub color: u32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotationConfig {
    pub initial: f64,
    pub rad_per_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopupConfig {
    pub behind_distance: f32,
    pub behind_opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    /// `None` applies input immediately; `Some(f)` eases it in by `f` per frame
    pub damping_factor: Option<f32>,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub dot_count: u32,
    pub dot_radius: f32,
    pub globe_radius: f32,
    pub globe_segments: u32,
    pub notable_threshold: u32,
    pub markers: MarkerStyles,
    pub palette: Palette,
    pub lighting: Lighting,
    pub fog: Option<Fog>,
    pub heatmap: HeatmapConfig,
    pub camera: CameraConfig,
    pub rotation: RotationConfig,
    pub popup: PopupConfig,
    pub orbit: OrbitConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GlobeConfig {
    /// 20k candidate points on a 580-unit sphere, yellow dots and magenta
    /// notable markers.
    pub fn classic() -> Self {
        Self {
            dot_count: DOT_COUNT,
            dot_radius: DOT_RADIUS,
            globe_radius: DOT_RADIUS - GLOBE_RADIUS_INSET,
            globe_segments: GLOBE_SEGMENTS,
            notable_threshold: NOTABLE_THRESHOLD,
            markers: MarkerStyles::default(),
            palette: Palette {
                globe: GLOBE_COLOR,
                globe_opacity: GLOBE_OPACITY,
                sky: GREEN,
                ground: YELLOW,
            },
            lighting: Lighting {
                hemisphere_intensity: HEMISPHERE_INTENSITY,
                ambient_color: GREEN,
                ambient_intensity: AMBIENT_INTENSITY,
            },
            fog: None,
            heatmap: HeatmapConfig::default(),
            camera: CameraConfig {
                fov_y_deg: CAMERA_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: camera_position_vec3(),
                target: Vec3::ZERO,
            },
            rotation: RotationConfig {
                initial: INITIAL_ROTATION_Y,
                rad_per_ms: ROTATION_RAD_PER_MS,
            },
            popup: PopupConfig {
                behind_distance: POPUP_BEHIND_DISTANCE,
                behind_opacity: POPUP_BEHIND_OPACITY,
            },
            orbit: OrbitConfig {
                damping_factor: None,
                rotate_speed: 1.0,
                zoom_speed: 1.0,
                min_distance: 1.0,
                max_distance: f32::INFINITY,
            },
        }
    }

    /// 80k candidate points, ring-shaped markers, globe radius derived from
    /// the dot radius, fog enabled.
    pub fn dense() -> Self {
        let mut cfg = Self::classic().with_dot_count(80_000).with_radius(600.0);
        cfg.markers.ordinary.shape = MarkerShape::Disc {
            radius: 1.2,
            segments: ORDINARY_SEGMENTS,
        };
        cfg.markers.notable.shape = MarkerShape::Ring {
            inner_radius: 1.2,
            outer_radius: MARKER_RADIUS,
            segments: NOTABLE_SEGMENTS,
        };
        cfg.markers.notable.scale_multiplier = 1.0;
        cfg.markers.ordinary.color = GREEN;
        cfg.with_fog(Fog {
            color: GLOBE_COLOR,
            near: FOG_NEAR,
            far: FOG_FAR,
        })
    }

    pub fn with_dot_count(mut self, dot_count: u32) -> Self {
        self.dot_count = dot_count;
        self
    }

    /// Sets the marker radius; the solid globe follows at a fixed inset.
    pub fn with_radius(mut self, dot_radius: f32) -> Self {
        self.dot_radius = dot_radius;
        self.globe_radius = (dot_radius - GLOBE_RADIUS_INSET).max(0.0);
        self
    }

    pub fn with_notable_threshold(mut self, threshold: u32) -> Self {
        self.notable_threshold = threshold;
        self
    }

    pub fn with_heatmap(mut self, heatmap: HeatmapConfig) -> Self {
        self.heatmap = heatmap;
        self
    }

    pub fn with_fog(mut self, fog: Fog) -> Self {
        self.fog = Some(fog);
        self
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.orbit.damping_factor = Some(factor.clamp(0.0, 1.0));
        self
    }
}
