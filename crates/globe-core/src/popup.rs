use crate::config::PopupConfig;
use crate::state::Camera;
use glam::Vec3;

/// Screen placement of the popup that follows the active marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupAnchor {
    /// Pixels from the viewport's left edge
    pub left: f32,
    /// Pixels from the viewport's top edge
    pub top: f32,
    pub opacity: f32,
    /// Marker is on the far side of the globe
    pub behind: bool,
}

/// Project `world` into a `width` x `height` viewport.
///
/// Occlusion is a distance heuristic: anything further from the camera than
/// `config.behind_distance` is treated as hidden behind the globe.
pub fn anchor(
    world: Vec3,
    camera: &Camera,
    width: f32,
    height: f32,
    config: &PopupConfig,
) -> PopupAnchor {
    let behind = world.distance(camera.eye) > config.behind_distance;
    let ndc = camera.view_proj().project_point3(world);
    PopupAnchor {
        left: ((0.5 + ndc.x / 2.0) * width).round(),
        top: ((0.5 - ndc.y / 2.0) * height).round(),
        opacity: if behind { config.behind_opacity } else { 1.0 },
        behind,
    }
}

impl PopupAnchor {
    /// Inline style declarations for the popup element. `display` is cleared
    /// so a previously hidden popup shows again.
    pub fn style_properties(&self) -> [(&'static str, String); 4] {
        [
            ("display", String::new()),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
            ("opacity", self.opacity.to_string()),
        ]
    }
}

/// Viewport in CSS pixels from a bounding rect, kept fractional and at least
/// one pixel on each axis.
pub fn viewport_size(width: f64, height: f64) -> (f32, f32) {
    ((width as f32).max(1.0), (height as f32).max(1.0))
}
