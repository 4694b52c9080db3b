use crate::config::OrbitConfig;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;
const ZOOM_STEP: f32 = 0.95;

/// Orbit camera around a fixed target, driven by pointer drag and wheel.
///
/// Input accumulates into pending deltas; [`OrbitControls::update`] applies
/// them once per frame and returns the new eye position.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z towards +X
    theta: f32,
    /// Polar angle from +Y
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    config: OrbitConfig,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3, config: OrbitConfig) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            config,
        }
    }

    /// Queue a drag of `(dx, dy)` pixels. Dragging across the full viewport
    /// height turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * dx / h * self.config.rotate_speed;
        self.pending_phi -= TAU * dy / h * self.config.rotate_speed;
    }

    /// Queue a wheel step. Negative deltas (scrolling up) move closer.
    pub fn zoom(&mut self, wheel_delta: f32) {
        let step = ZOOM_STEP.powf(self.config.zoom_speed);
        if wheel_delta < 0.0 {
            self.pending_scale *= step;
        } else if wheel_delta > 0.0 {
            self.pending_scale /= step;
        }
    }

    /// Apply pending input and return the eye position.
    pub fn update(&mut self) -> Vec3 {
        match self.config.damping_factor {
            Some(f) => {
                self.theta += self.pending_theta * f;
                self.phi += self.pending_phi * f;
            }
            None => {
                self.theta += self.pending_theta;
                self.phi += self.pending_phi;
            }
        }
        self.theta = self.theta.rem_euclid(TAU);
        self.phi = self.phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        self.radius = (self.radius * self.pending_scale)
            .clamp(self.config.min_distance, self.config.max_distance);

        match self.config.damping_factor {
            Some(f) => {
                self.pending_theta *= 1.0 - f;
                self.pending_phi *= 1.0 - f;
            }
            None => {
                self.pending_theta = 0.0;
                self.pending_phi = 0.0;
            }
        }
        self.pending_scale = 1.0;
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        self.target + Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }
}
