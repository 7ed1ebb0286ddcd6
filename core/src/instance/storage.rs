//! JSON persistence of problem instances.
//!
//! The on-disk layout keeps zones and cameras as positional tuples so
//! saved files stay interchangeable with the historical format:
//! `zones: [[x, y, priority, population, description], ...]` and
//! `cameras: [[x, y, cost, range, angle, type], ...]`.

use crate::instance::{CameraSite, CameraType, ProblemInstance, ViewAngle, Zone};
use crate::prelude::ModelResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

type ZoneRow = (f64, f64, u8, f64, String);
type CameraRow = (f64, f64, f64, f64, ViewAngle, CameraType);

#[derive(Debug, Serialize, Deserialize)]
struct InstanceFile {
    max_cameras: usize,
    max_budget: f64,
    zones: Vec<ZoneRow>,
    cameras: Vec<CameraRow>,
}

impl From<&ProblemInstance> for InstanceFile {
    fn from(instance: &ProblemInstance) -> Self {
        Self {
            max_cameras: instance.max_cameras,
            max_budget: instance.max_budget,
            zones: instance
                .zones
                .iter()
                .map(|z| (z.x, z.y, z.priority, z.population, z.description.clone()))
                .collect(),
            cameras: instance
                .cameras
                .iter()
                .map(|c| (c.x, c.y, c.cost, c.range, c.angle, c.kind))
                .collect(),
        }
    }
}

impl From<InstanceFile> for ProblemInstance {
    fn from(file: InstanceFile) -> Self {
        let zones = file
            .zones
            .into_iter()
            .map(|(x, y, priority, population, description)| {
                Zone::new(x, y, priority, population, description)
            })
            .collect();
        let cameras = file
            .cameras
            .into_iter()
            .map(|(x, y, cost, range, angle, kind)| {
                CameraSite::new(x, y, cost, range, angle, kind)
            })
            .collect();
        ProblemInstance::new(zones, cameras, file.max_budget, file.max_cameras)
    }
}

impl ProblemInstance {
    /// Parses an instance from its JSON form and validates it.
    pub fn from_json_str(contents: &str) -> ModelResult<Self> {
        let file: InstanceFile = serde_json::from_str(contents)?;
        let instance = ProblemInstance::from(file);
        instance.validate()?;
        Ok(instance)
    }

    /// Serializes the instance into the persisted JSON shape.
    pub fn to_json_string(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(&InstanceFile::from(self))?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ModelResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::ClusterAssignment;
    use crate::geometry::CoverageMatrix;

    fn sample() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                Zone::new(10.0, 20.0, 8, 350.0, "main entrance"),
                Zone::new(400.0, 80.0, 3, 40.0, "parking"),
            ],
            vec![
                CameraSite::new(15.0, 25.0, 4200.0, 60.0, ViewAngle::Deg180, CameraType::Ptz),
                CameraSite::new(390.0, 70.0, 2800.0, 45.0, ViewAngle::Deg360, CameraType::Fixed),
            ],
            20_000.0,
            6,
        )
    }

    #[test]
    fn persisted_shape_uses_positional_rows() {
        let json = sample().to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["max_cameras"], 6);
        assert_eq!(value["zones"][0][2], 8);
        assert_eq!(value["zones"][0][4], "main entrance");
        assert_eq!(value["cameras"][0][4], 180);
        assert_eq!(value["cameras"][0][5], "PTZ");
    }

    #[test]
    fn round_trip_reproduces_derived_structures() {
        let original = sample();
        let reloaded = ProblemInstance::from_json_str(&original.to_json_string().unwrap()).unwrap();
        assert_eq!(original, reloaded);

        let coverage_a = CoverageMatrix::compute(&original.cameras, &original.zones);
        let coverage_b = CoverageMatrix::compute(&reloaded.cameras, &reloaded.zones);
        assert_eq!(coverage_a, coverage_b);

        let clusters_a = ClusterAssignment::compute(&original.cameras, original.cluster_count);
        let clusters_b = ClusterAssignment::compute(&reloaded.cameras, reloaded.cluster_count);
        assert_eq!(clusters_a.labels(), clusters_b.labels());
    }

    #[test]
    fn malformed_angle_is_rejected_at_parse_time() {
        let json = r#"{
            "max_cameras": 2,
            "max_budget": 1000.0,
            "zones": [[0.0, 0.0, 5, 10.0, "gate"]],
            "cameras": [[1.0, 1.0, 500.0, 30.0, 45, "Fixed"]]
        }"#;
        assert!(ProblemInstance::from_json_str(json).is_err());
    }
}
