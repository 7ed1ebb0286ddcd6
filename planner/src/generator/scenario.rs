use crate::workflow::config::PlanConfig;
use camoptcore::instance::{CameraSite, CameraType, ProblemInstance, ViewAngle, Zone};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic placement scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub zones: usize,
    pub cameras: usize,
    pub seed: u64,
    /// Side length of the square area positions are drawn from.
    pub area: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            zones: 20,
            cameras: 15,
            seed: 0,
            area: 1000.0,
        }
    }
}

const ZONE_DESCRIPTIONS: [&str; 7] = [
    "Commercial area",
    "Residential area",
    "Industrial area",
    "Parking",
    "Main entrance",
    "Sensitive area",
    "Public area",
];

// PTZ-weighted mix of candidate equipment.
const TYPE_MIX: [CameraType; 5] = [
    CameraType::Fixed,
    CameraType::Ptz,
    CameraType::Thermal,
    CameraType::Ptz,
    CameraType::Fixed,
];

const ANGLES: [ViewAngle; 4] = [
    ViewAngle::Deg90,
    ViewAngle::Deg180,
    ViewAngle::Deg270,
    ViewAngle::Deg360,
];

/// Builds a randomized but seed-deterministic problem instance: the
/// same config always yields the same zones and candidate sites.
pub fn build_instance(
    config: &GeneratorConfig,
    plan: &PlanConfig,
) -> anyhow::Result<ProblemInstance> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut zones = Vec::with_capacity(config.zones);
    for _ in 0..config.zones {
        let x = rng.gen_range(0.0..config.area);
        let y = rng.gen_range(0.0..config.area);
        let priority = rng.gen_range(1..=10u8);
        let population = rng.gen_range(10..1000) as f64;
        let description = ZONE_DESCRIPTIONS[rng.gen_range(0..ZONE_DESCRIPTIONS.len())];
        zones.push(Zone::new(x, y, priority, population, description));
    }

    let mut cameras = Vec::with_capacity(config.cameras);
    for _ in 0..config.cameras {
        let x = rng.gen_range(0.0..config.area);
        let y = rng.gen_range(0.0..config.area);
        let base_cost = rng.gen_range(2000.0..8000.0);
        let range = rng.gen_range(30.0..100.0);
        let angle = ANGLES[rng.gen_range(0..ANGLES.len())];
        let kind = TYPE_MIX[rng.gen_range(0..TYPE_MIX.len())];
        let cost = match kind {
            CameraType::Ptz => base_cost * 1.5,
            CameraType::Thermal => base_cost * 2.0,
            CameraType::Fixed => base_cost,
        };
        cameras.push(CameraSite::new(x, y, cost, range, angle, kind));
    }

    let mut instance = ProblemInstance::new(zones, cameras, plan.max_budget, plan.max_cameras);
    plan.apply_policy(&mut instance);
    instance.validate()?;
    Ok(instance)
}
