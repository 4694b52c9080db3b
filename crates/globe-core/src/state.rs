//! Per-frame visual state shared by the web and native frontends.
//!
//! These types avoid platform-specific APIs. The frontends build a [`Camera`]
//! from the orbit controller every frame and advance the [`GlobeRotation`]
//! by the real elapsed time.

use crate::config::{CameraConfig, RotationConfig};
use glam::{Mat4, Vec3};
use std::f64::consts::TAU;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig, eye: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target: config.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: config.fov_y_deg.to_radians(),
            znear: config.near,
            zfar: config.far,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Y-axis rotation of the marker group. Speed is per millisecond of real
/// time, so the result does not depend on frame rate.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeRotation {
    angle: f64,
    rad_per_ms: f64,
}

impl GlobeRotation {
    pub fn new(config: &RotationConfig) -> Self {
        Self {
            angle: config.initial.rem_euclid(TAU),
            rad_per_ms: config.rad_per_ms,
        }
    }

    /// Angle in radians, in [0, 2π).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance by `delta_ms` of elapsed time; negative deltas are ignored.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.angle = (self.angle + delta_ms * self.rad_per_ms).rem_euclid(TAU);
        }
        self.angle
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle as f32)
    }

    pub fn apply(&self, local: Vec3) -> Vec3 {
        self.matrix().transform_point3(local)
    }
}
