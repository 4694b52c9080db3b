use crate::config::GlobeConfig;
use crate::constants::hex_to_linear;
use crate::state::Camera;
use bytemuck::{Pod, Zeroable};

/// Scene-wide uniforms shared by the marker and globe shaders.
/// Layout must match `Scene` in `markers.wgsl` and `globe.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// x: group rotation around Y (radians)
    pub group: [f32; 4],
    /// rgb + intensity
    pub sky: [f32; 4],
    pub ground: [f32; 4],
    pub ambient: [f32; 4],
    /// rgb + opacity
    pub globe_color: [f32; 4],
    /// rgb + enabled flag
    pub fog_color: [f32; 4],
    /// near, far
    pub fog_range: [f32; 4],
}

impl SceneUniforms {
    pub fn new(config: &GlobeConfig, camera: &Camera, rotation: f64) -> Self {
        let rgba = |hex: u32, w: f32| {
            let [r, g, b] = hex_to_linear(hex);
            [r, g, b, w]
        };
        let light = &config.lighting;
        let (fog_color, fog_range) = match &config.fog {
            Some(f) => (rgba(f.color, 1.0), [f.near, f.far, 0.0, 0.0]),
            None => ([0.0; 4], [0.0; 4]),
        };
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            group: [rotation as f32, 0.0, 0.0, 0.0],
            sky: rgba(config.palette.sky, light.hemisphere_intensity),
            ground: rgba(config.palette.ground, light.hemisphere_intensity),
            ambient: rgba(light.ambient_color, light.ambient_intensity),
            globe_color: rgba(config.palette.globe, config.palette.globe_opacity),
            fog_color,
            fog_range,
        }
    }
}
