use glam::Vec3;
use std::f64::consts::{PI, TAU};

/// Candidate location on the sphere for index `i` of a budget of `n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub index: u32,
    /// Polar angle from +Y, in [0, π]
    pub phi: f64,
    /// Azimuth around +Y (unreduced)
    pub theta: f64,
    /// Texture coordinates, each in [0, 1]
    pub u: f64,
    pub v: f64,
}

/// Staircase spherical distribution: equal-area steps in `cos(phi)` with the
/// azimuth advancing proportionally to `phi`.
pub fn sample_point(i: u32, n: u32) -> SamplePoint {
    let n_f = n.max(1) as f64;
    let ratio = (-1.0 + 2.0 * i as f64 / n_f).clamp(-1.0, 1.0);
    let phi = ratio.acos();
    let theta = (n_f * PI).sqrt() * phi;
    SamplePoint {
        index: i,
        phi,
        theta,
        u: theta.rem_euclid(TAU) / TAU,
        v: phi / PI,
    }
}

/// All points for a budget of `n`, from `n` down to 0. An empty budget
/// yields nothing.
pub fn sample_points(n: u32) -> impl Iterator<Item = SamplePoint> {
    let upper = if n == 0 { None } else { Some(n) };
    upper
        .into_iter()
        .flat_map(move |top| (0..=top).rev().map(move |i| sample_point(i, top)))
}

/// Number of points `sample_points(n)` yields; `u64` so `u32::MAX` fits.
pub fn sample_count(n: u32) -> u64 {
    if n == 0 {
        0
    } else {
        u64::from(n) + 1
    }
}

/// Spherical to Cartesian with +Y as the pole: `phi` from +Y, `theta`
/// measured from +Z towards +X.
pub fn spherical_to_cartesian(radius: f64, phi: f64, theta: f64) -> Vec3 {
    let s = phi.sin() * radius;
    Vec3::new(
        (s * theta.sin()) as f32,
        (phi.cos() * radius) as f32,
        (s * theta.cos()) as f32,
    )
}
