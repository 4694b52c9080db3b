use crate::config::GlobeConfig;
use crate::distribution::{sample_count, sample_points, spherical_to_cartesian};
use crate::heatmap::HeatmapSampler;
use crate::marker::{Marker, MarkerHandle, MarkerInstance, MarkerKind};
use crate::state::GlobeRotation;
use glam::Vec3;
use rand::Rng;

/// Markers placed once at startup plus the group rotation that animates them.
#[derive(Clone, Debug)]
pub struct GlobeScene {
    pub markers: Vec<Marker>,
    /// Notable marker the popup follows
    pub active: Option<MarkerHandle>,
    pub rotation: GlobeRotation,
    /// Number of candidate points examined
    pub candidates: u64,
}

/// Place a marker at every sample point whose heatmap intensity is positive.
///
/// Points are visited from `dot_count` down to 0. Each emitted marker draws
/// two values from `rng` (opacity, then scale). The last notable marker
/// visited becomes the active one.
pub fn build_globe<R: Rng>(
    config: &GlobeConfig,
    sampler: &HeatmapSampler,
    rng: &mut R,
) -> GlobeScene {
    let mut markers = Vec::new();
    let mut active = None;

    for p in sample_points(config.dot_count) {
        let intensity = sampler.get_color(p.u, p.v);
        let Some(kind) = MarkerKind::classify(intensity, config.notable_threshold) else {
            continue;
        };
        let style = config.markers.for_kind(kind);
        let position = spherical_to_cartesian(config.dot_radius as f64, p.phi, p.theta);
        let opacity = style.opacity.resolve(rng.gen::<f32>());
        let scale = (rng.gen::<f32>() + crate::constants::SCALE_BASE) * style.scale_multiplier;

        if kind == MarkerKind::Notable {
            active = Some(MarkerHandle(markers.len()));
        }
        markers.push(Marker {
            index: p.index,
            kind,
            position,
            normal: facing_center(position),
            scale,
            opacity,
            intensity,
        });
    }

    let scene = GlobeScene {
        markers,
        active,
        rotation: GlobeRotation::new(&config.rotation),
        candidates: sample_count(config.dot_count),
    };
    log::info!(
        "[globe] candidates={} markers={} notable={} active={:?}",
        scene.candidates,
        scene.markers.len(),
        scene.count(MarkerKind::Notable),
        scene.active.map(|h| h.index())
    );
    scene
}

fn facing_center(position: Vec3) -> Vec3 {
    (-position).try_normalize().unwrap_or(Vec3::NEG_Y)
}

impl GlobeScene {
    pub fn marker(&self, handle: MarkerHandle) -> Option<&Marker> {
        self.markers.get(handle.0)
    }

    pub fn active_marker(&self) -> Option<&Marker> {
        self.active.and_then(|h| self.marker(h))
    }

    pub fn count(&self, kind: MarkerKind) -> usize {
        self.markers.iter().filter(|m| m.kind == kind).count()
    }

    /// World-space position of a marker under the current group rotation.
    pub fn world_position(&self, handle: MarkerHandle) -> Option<Vec3> {
        self.marker(handle).map(|m| self.rotation.apply(m.position))
    }

    /// Instance data for every marker of `kind`, in placement order.
    pub fn instances(&self, config: &GlobeConfig, kind: MarkerKind) -> Vec<MarkerInstance> {
        let style = config.markers.for_kind(kind);
        self.markers
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| MarkerInstance::new(m, style))
            .collect()
    }
}
