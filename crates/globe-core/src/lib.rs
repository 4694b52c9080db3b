pub mod config;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod heatmap;
pub mod marker;
pub mod mesh;
pub mod orbit;
pub mod popup;
pub mod render;
pub mod scene;
pub mod state;
pub mod uniforms;

pub static MARKERS_WGSL: &str = include_str!("../shaders/markers.wgsl");
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");

pub use config::*;
pub use constants::*;
pub use distribution::*;
pub use error::GlobeError;
pub use heatmap::*;
pub use marker::*;
pub use orbit::OrbitControls;
pub use popup::{anchor as popup_anchor, viewport_size as popup_viewport, PopupAnchor};
pub use render::GlobeRenderer;
pub use scene::*;
pub use state::*;
pub use uniforms::SceneUniforms;
