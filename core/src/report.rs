//! Turns a raw [`Solution`] back into the metrics callers act on:
//! coverage rate, budget utilization, redundancy levels and per-type /
//! per-priority breakdowns. Pure reads; no solver access.

use crate::geometry::CoverageMatrix;
use crate::instance::{CameraType, ProblemInstance};
use crate::model::Solution;
use serde::{Deserialize, Serialize};

/// Installed-camera counts per equipment class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub fixed: usize,
    pub ptz: usize,
    pub thermal: usize,
}

/// Covered/total zone counts per priority band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBandCoverage {
    /// Priorities 1-3.
    pub low_covered: usize,
    pub low_total: usize,
    /// Priorities 4-6.
    pub medium_covered: usize,
    pub medium_total: usize,
    /// Priorities 7-10.
    pub high_covered: usize,
    pub high_total: usize,
}

/// Derived metrics for one solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Covered zones over all zones, 0 when the instance has no zones.
    pub coverage_rate: f64,
    pub covered_count: usize,
    pub installed_count: usize,
    pub total_cost: f64,
    /// Spent cost over the budget ceiling; 0 when the budget is 0.
    pub budget_utilization: f64,
    /// Installed cameras covering each zone; 0 for uncovered zones.
    pub zone_redundancy: Vec<usize>,
    /// Mean redundancy over covered zones only; 0 when none is covered.
    pub mean_redundancy: f64,
    pub cameras_by_type: TypeBreakdown,
    pub coverage_by_band: PriorityBandCoverage,
}

pub struct SolutionInterpreter;

impl SolutionInterpreter {
    pub fn summarize(
        instance: &ProblemInstance,
        coverage: &CoverageMatrix,
        solution: &Solution,
    ) -> CoverageReport {
        let n_zones = instance.zones.len();

        let covered_count = solution.covered.iter().filter(|&&on| on).count();
        let coverage_rate = if n_zones > 0 {
            covered_count as f64 / n_zones as f64
        } else {
            0.0
        };

        let mut installed_count = 0;
        let mut total_cost = 0.0;
        let mut cameras_by_type = TypeBreakdown::default();
        for (i, camera) in instance.cameras.iter().enumerate() {
            if !solution.installed.get(i).copied().unwrap_or(false) {
                continue;
            }
            installed_count += 1;
            total_cost += camera.cost;
            match camera.kind {
                CameraType::Fixed => cameras_by_type.fixed += 1,
                CameraType::Ptz => cameras_by_type.ptz += 1,
                CameraType::Thermal => cameras_by_type.thermal += 1,
            }
        }
        let budget_utilization = if instance.max_budget > 0.0 {
            total_cost / instance.max_budget
        } else {
            0.0
        };

        let mut zone_redundancy = vec![0usize; n_zones];
        let mut redundancy_sum = 0usize;
        for j in 0..n_zones {
            if solution.covered.get(j).copied().unwrap_or(false) {
                let level = coverage.installed_redundancy(j, &solution.installed);
                zone_redundancy[j] = level;
                redundancy_sum += level;
            }
        }
        let mean_redundancy = if covered_count > 0 {
            redundancy_sum as f64 / covered_count as f64
        } else {
            0.0
        };

        let mut coverage_by_band = PriorityBandCoverage::default();
        for (j, zone) in instance.zones.iter().enumerate() {
            let covered = solution.covered.get(j).copied().unwrap_or(false);
            match zone.priority {
                1..=3 => {
                    coverage_by_band.low_total += 1;
                    if covered {
                        coverage_by_band.low_covered += 1;
                    }
                }
                4..=6 => {
                    coverage_by_band.medium_total += 1;
                    if covered {
                        coverage_by_band.medium_covered += 1;
                    }
                }
                _ => {
                    coverage_by_band.high_total += 1;
                    if covered {
                        coverage_by_band.high_covered += 1;
                    }
                }
            }
        }

        CoverageReport {
            coverage_rate,
            covered_count,
            installed_count,
            total_cost,
            budget_utilization,
            zone_redundancy,
            mean_redundancy,
            cameras_by_type,
            coverage_by_band,
        }
    }
}
