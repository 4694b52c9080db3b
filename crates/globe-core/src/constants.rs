use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Dot placement
pub const DOT_COUNT: u32 = 20_000; // candidate points on the sphere
pub const DOT_RADIUS: f32 = 580.0; // radius markers are placed at
pub const GLOBE_RADIUS_INSET: f32 = 20.0; // solid globe sits this far below the markers
pub const GLOBE_SEGMENTS: u32 = 250;
pub const NOTABLE_THRESHOLD: u32 = 120; // intensities above this get the notable style

// Marker sizing
pub const MARKER_RADIUS: f32 = 2.0;
pub const ORDINARY_SEGMENTS: u32 = 5; // a pentagon this small reads as a circle
pub const NOTABLE_SEGMENTS: u32 = 25;
pub const SCALE_BASE: f32 = 0.5; // scale = SCALE_BASE + random [0, 1)
pub const NOTABLE_SCALE_MULTIPLIER: f32 = 4.0;
pub const ORDINARY_OPACITY_BASE: f32 = 0.25;
pub const ORDINARY_OPACITY_SPAN: f32 = 0.5;

// Heatmap raster and lookup scale. The lookup scale is smaller than the
// canvas the image is drawn into; coordinates are scaled by the lookup size.
pub const HEATMAP_SOURCE: &str = "./map.png";
pub const HEATMAP_CANVAS_WIDTH: u32 = 3840;
pub const HEATMAP_CANVAS_HEIGHT: u32 = 2160;
pub const HEATMAP_LOOKUP_WIDTH: f64 = 2754.0;
pub const HEATMAP_LOOKUP_HEIGHT: f64 = 1397.0;

// Palette (sRGB hex)
pub const GREEN: u32 = 0xc1fdc3;
pub const YELLOW: u32 = 0xf9c982;
pub const GLOBE_COLOR: u32 = 0x101c45;
pub const NOTABLE_COLOR: u32 = 0xb800c8;
pub const GLOBE_OPACITY: f32 = 0.6;

// Lights
pub const HEMISPHERE_INTENSITY: f32 = 1.8;
pub const AMBIENT_INTENSITY: f32 = 0.0;

// Fog (off by default)
pub const FOG_NEAR: f32 = 1000.0;
pub const FOG_FAR: f32 = 2200.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 5000.0;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 600.0, 1200.0];

// Rotation
pub const ROTATION_RAD_PER_MS: f64 = 0.0001;
pub const INITIAL_ROTATION_Y: f64 = -std::f64::consts::FRAC_PI_2;

// Popup anchoring
pub const POPUP_BEHIND_DISTANCE: f32 = 1200.0; // further than this counts as behind the globe
pub const POPUP_BEHIND_OPACITY: f32 = 0.25;

#[inline]
pub fn camera_position_vec3() -> Vec3 {
    Vec3::from(CAMERA_POSITION)
}

/// Convert an sRGB hex color (`0xRRGGBB`) into linear RGB components.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
