use anyhow::Context;
use camoptcore::instance::ProblemInstance;
use camoptcore::prelude::SolverConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Run parameters for one planning invocation, loadable from YAML.
/// `max_cameras`/`max_budget` apply to generated scenarios; instances
/// loaded from file keep their own limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub max_cameras: usize,
    pub max_budget: f64,
    pub redundancy_threshold: u8,
    pub ptz_min_fraction: f64,
    /// Overrides the derived geographic cluster count when set.
    pub cluster_count: Option<usize>,
    pub redundancy_bonus: bool,
    pub time_limit_secs: f64,
    pub mip_gap: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_cameras: 10,
            max_budget: 50_000.0,
            redundancy_threshold: 5,
            ptz_min_fraction: 0.3,
            cluster_count: None,
            redundancy_bonus: false,
            time_limit_secs: 300.0,
            mip_gap: 0.01,
        }
    }
}

impl PlanConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading plan config {}", path_ref.display()))?;
        let config: PlanConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing plan config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies the policy knobs to an instance, leaving its budget and
    /// camera ceiling untouched.
    pub fn apply_policy(&self, instance: &mut ProblemInstance) {
        instance.redundancy_threshold = self.redundancy_threshold;
        instance.ptz_min_fraction = self.ptz_min_fraction;
        if let Some(clusters) = self.cluster_count {
            instance.cluster_count = clusters;
        }
    }

    pub fn to_solver_config(&self) -> SolverConfig {
        SolverConfig {
            time_limit_secs: self.time_limit_secs,
            mip_gap: self.mip_gap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_documented_policy() {
        let config = PlanConfig::default();
        assert_eq!(config.max_cameras, 10);
        assert_eq!(config.redundancy_threshold, 5);
        assert!((config.ptz_min_fraction - 0.3).abs() < 1e-12);
        assert_eq!(config.to_solver_config().time_limit_secs, 300.0);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"max_cameras: 6\nmax_budget: 20000\nredundancy_threshold: 7\ncluster_count: 2\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = PlanConfig::load(&path).unwrap();
        assert_eq!(config.max_cameras, 6);
        assert_eq!(config.redundancy_threshold, 7);
        assert_eq!(config.cluster_count, Some(2));
        // Unlisted fields fall back to defaults.
        assert!((config.mip_gap - 0.01).abs() < 1e-12);
    }
}
