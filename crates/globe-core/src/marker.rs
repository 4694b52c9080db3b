use crate::constants::*;
use crate::mesh;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerShape {
    Disc {
        radius: f32,
        segments: u32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
    },
}

impl MarkerShape {
    /// Triangle-list outline in the marker's local XY plane.
    pub fn vertices(&self) -> Vec<[f32; 2]> {
        match *self {
            MarkerShape::Disc { radius, segments } => mesh::circle_geometry(radius, segments),
            MarkerShape::Ring {
                inner_radius,
                outer_radius,
                segments,
            } => mesh::ring_geometry(inner_radius, outer_radius, segments),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityRule {
    Fixed(f32),
    /// `base + random [0, 1) * span`
    Random { base: f32, span: f32 },
}

impl OpacityRule {
    pub fn resolve(&self, roll: f32) -> f32 {
        match *self {
            OpacityRule::Fixed(o) => o,
            OpacityRule::Random { base, span } => base + roll * span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub color: u32,
    pub opacity: OpacityRule,
    pub scale_multiplier: f32,
    /// Lit by the scene lights; unlit markers show their flat color
    pub lit: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyles {
    pub ordinary: MarkerStyle,
    pub notable: MarkerStyle,
}

impl Default for MarkerStyles {
    fn default() -> Self {
        Self {
            ordinary: MarkerStyle {
                shape: MarkerShape::Disc {
                    radius: MARKER_RADIUS,
                    segments: ORDINARY_SEGMENTS,
                },
                color: YELLOW,
                opacity: OpacityRule::Random {
                    base: ORDINARY_OPACITY_BASE,
                    span: ORDINARY_OPACITY_SPAN,
                },
                scale_multiplier: 1.0,
                lit: true,
            },
            notable: MarkerStyle {
                shape: MarkerShape::Disc {
                    radius: MARKER_RADIUS,
                    segments: NOTABLE_SEGMENTS,
                },
                color: NOTABLE_COLOR,
                opacity: OpacityRule::Fixed(1.0),
                scale_multiplier: NOTABLE_SCALE_MULTIPLIER,
                lit: false,
            },
        }
    }
}

impl MarkerStyles {
    pub fn for_kind(&self, kind: MarkerKind) -> &MarkerStyle {
        match kind {
            MarkerKind::Ordinary => &self.ordinary,
            MarkerKind::Notable => &self.notable,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Ordinary,
    Notable,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 2] = [MarkerKind::Ordinary, MarkerKind::Notable];

    /// `None` for zero intensity (no marker at all).
    pub fn classify(intensity: u32, notable_threshold: u32) -> Option<Self> {
        match intensity {
            0 => None,
            v if v > notable_threshold => Some(MarkerKind::Notable),
            _ => Some(MarkerKind::Ordinary),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Sample index the marker was placed for
    pub index: u32,
    pub kind: MarkerKind,
    /// Position in the rotating group's local space
    pub position: Vec3,
    /// Unit vector facing the sphere's center
    pub normal: Vec3,
    pub scale: f32,
    pub opacity: f32,
    pub intensity: u32,
}

/// Index of a marker inside its [`GlobeScene`](crate::scene::GlobeScene).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub(crate) usize);

impl MarkerHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-instance vertex data for the marker pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MarkerInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    /// x: 1.0 when lit
    pub shading: [f32; 4],
}

impl MarkerInstance {
    pub fn new(marker: &Marker, style: &MarkerStyle) -> Self {
        let [r, g, b] = hex_to_linear(style.color);
        Self {
            position: marker.position.to_array(),
            scale: marker.scale,
            color: [r, g, b, marker.opacity],
            shading: [if style.lit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}
