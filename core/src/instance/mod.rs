pub mod site;
pub mod storage;
pub mod zone;

pub use site::{CameraSite, CameraType, ViewAngle};
pub use zone::{Zone, PRIORITY_MAX, PRIORITY_MIN};

use crate::prelude::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// Default redundancy priority threshold: zones at or above it require
/// two covering cameras to count as covered.
pub const DEFAULT_REDUNDANCY_THRESHOLD: u8 = 5;
/// Default minimum fraction of installed cameras that must be PTZ.
pub const DEFAULT_PTZ_MIN_FRACTION: f64 = 0.3;

/// Complete description of one placement problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub zones: Vec<Zone>,
    pub cameras: Vec<CameraSite>,
    pub max_budget: f64,
    pub max_cameras: usize,
    pub redundancy_threshold: u8,
    pub ptz_min_fraction: f64,
    pub cluster_count: usize,
}

impl ProblemInstance {
    /// Builds an instance with the default policy knobs; the geographic
    /// cluster count is derived from the camera ceiling.
    pub fn new(
        zones: Vec<Zone>,
        cameras: Vec<CameraSite>,
        max_budget: f64,
        max_cameras: usize,
    ) -> Self {
        Self {
            zones,
            cameras,
            max_budget,
            max_cameras,
            redundancy_threshold: DEFAULT_REDUNDANCY_THRESHOLD,
            ptz_min_fraction: DEFAULT_PTZ_MIN_FRACTION,
            cluster_count: default_cluster_count(max_cameras),
        }
    }

    /// Rejects malformed instances before any model is built.
    pub fn validate(&self) -> ModelResult<()> {
        if !self.max_budget.is_finite() || self.max_budget < 0.0 {
            return Err(ModelError::Configuration(format!(
                "budget must be a non-negative finite number, got {}",
                self.max_budget
            )));
        }
        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&self.redundancy_threshold) {
            return Err(ModelError::Configuration(format!(
                "redundancy threshold {} outside priority range {}..={}",
                self.redundancy_threshold, PRIORITY_MIN, PRIORITY_MAX
            )));
        }
        if self.cluster_count == 0 {
            return Err(ModelError::Configuration(
                "cluster count must be positive".to_string(),
            ));
        }
        if !self.ptz_min_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.ptz_min_fraction)
        {
            return Err(ModelError::Configuration(format!(
                "PTZ minimum fraction {} outside 0..=1",
                self.ptz_min_fraction
            )));
        }
        for (j, zone) in self.zones.iter().enumerate() {
            if !zone.x.is_finite() || !zone.y.is_finite() {
                return Err(ModelError::Configuration(format!(
                    "zone {j} has a non-finite position"
                )));
            }
            if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&zone.priority) {
                return Err(ModelError::Configuration(format!(
                    "zone {j} priority {} outside {}..={}",
                    zone.priority, PRIORITY_MIN, PRIORITY_MAX
                )));
            }
            if !zone.population.is_finite() || zone.population < 0.0 {
                return Err(ModelError::Configuration(format!(
                    "zone {j} population {} must be non-negative",
                    zone.population
                )));
            }
        }
        for (i, camera) in self.cameras.iter().enumerate() {
            if !camera.x.is_finite() || !camera.y.is_finite() {
                return Err(ModelError::Configuration(format!(
                    "camera {i} has a non-finite position"
                )));
            }
            if !camera.cost.is_finite() || camera.cost < 0.0 {
                return Err(ModelError::Configuration(format!(
                    "camera {i} cost {} must be non-negative",
                    camera.cost
                )));
            }
            if !camera.range.is_finite() || camera.range < 0.0 {
                return Err(ModelError::Configuration(format!(
                    "camera {i} range {} must be non-negative",
                    camera.range
                )));
            }
        }
        Ok(())
    }

    /// Indices of candidate cameras of the given type.
    pub fn cameras_of_type(&self, kind: CameraType) -> Vec<usize> {
        self.cameras
            .iter()
            .enumerate()
            .filter(|(_, camera)| camera.kind == kind)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Cluster-count policy: roughly one cluster per three allowed cameras,
/// at least one and at most four.
pub fn default_cluster_count(max_cameras: usize) -> usize {
    (max_cameras / 3).clamp(1, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![Zone::new(0.0, 0.0, 5, 100.0, "gate")],
            vec![CameraSite::new(
                1.0,
                1.0,
                2500.0,
                50.0,
                ViewAngle::Deg360,
                CameraType::Ptz,
            )],
            10_000.0,
            4,
        )
    }

    #[test]
    fn valid_instance_passes_validation() {
        small_instance().validate().unwrap();
    }

    #[test]
    fn threshold_outside_priority_range_is_rejected() {
        let mut instance = small_instance();
        instance.redundancy_threshold = 0;
        assert!(instance.validate().is_err());
        instance.redundancy_threshold = 11;
        assert!(instance.validate().is_err());
    }

    #[test]
    fn non_positive_cluster_count_is_rejected() {
        let mut instance = small_instance();
        instance.cluster_count = 0;
        assert!(instance.validate().is_err());
    }

    #[test]
    fn negative_cost_and_range_are_rejected() {
        let mut instance = small_instance();
        instance.cameras[0].cost = -1.0;
        assert!(instance.validate().is_err());

        let mut instance = small_instance();
        instance.cameras[0].range = -0.5;
        assert!(instance.validate().is_err());
    }

    #[test]
    fn zone_priority_outside_range_is_rejected() {
        let mut instance = small_instance();
        instance.zones[0].priority = 0;
        assert!(instance.validate().is_err());
    }

    #[test]
    fn cluster_count_policy_tracks_camera_ceiling() {
        assert_eq!(default_cluster_count(0), 1);
        assert_eq!(default_cluster_count(5), 1);
        assert_eq!(default_cluster_count(9), 3);
        assert_eq!(default_cluster_count(40), 4);
    }
}
