use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct SphereMesh {
    pub vertices: Vec<GlobeVertex>,
    pub indices: Vec<u32>,
}

/// Flat disc in the XY plane as a triangle list (one triangle per segment).
pub fn circle_geometry(radius: f32, segments: u32) -> Vec<[f32; 2]> {
    let segments = segments.max(3);
    let rim = |s: u32| {
        let a = s as f32 / segments as f32 * TAU;
        [radius * a.cos(), radius * a.sin()]
    };
    let mut out = Vec::with_capacity(segments as usize * 3);
    for s in 0..segments {
        out.push([0.0, 0.0]);
        out.push(rim(s));
        out.push(rim(s + 1));
    }
    out
}

/// Flat annulus in the XY plane as a triangle list (two triangles per segment).
pub fn ring_geometry(inner_radius: f32, outer_radius: f32, segments: u32) -> Vec<[f32; 2]> {
    let segments = segments.max(3);
    let at = |r: f32, s: u32| {
        let a = s as f32 / segments as f32 * TAU;
        [r * a.cos(), r * a.sin()]
    };
    let mut out = Vec::with_capacity(segments as usize * 6);
    for s in 0..segments {
        let i0 = at(inner_radius, s);
        let i1 = at(inner_radius, s + 1);
        let o0 = at(outer_radius, s);
        let o1 = at(outer_radius, s + 1);
        out.extend_from_slice(&[i0, o0, o1, i0, o1, i1]);
    }
    out
}

/// UV sphere with `(width_segments + 1) * (height_segments + 1)` vertices.
/// Degenerate triangles at the poles are skipped.
pub fn sphere_geometry(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let n = [
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            ];
            vertices.push(GlobeVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            });
        }
    }

    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    SphereMesh { vertices, indices }
}
