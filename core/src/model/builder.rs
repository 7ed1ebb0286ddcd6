use crate::clustering::ClusterAssignment;
use crate::geometry::CoverageMatrix;
use crate::instance::ProblemInstance;
use crate::model::description::{
    Constraint, ConstraintOp, ModelDescription, Objective, VariableSpec,
};
use crate::prelude::{ModelError, ModelOptions, ModelResult, SolverConfig};
use crate::solver::{SolveCapability, SolveStatus};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Zones at or above this priority attract the optional redundancy
/// bonus in the objective.
const CRITICAL_PRIORITY: u8 = 7;

/// Lifecycle of one model instance. The finished states are absorbing;
/// a re-solve with different parameters requires a new model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unbuilt,
    Built,
    Solving,
    Finished(SolveStatus),
}

/// Result of one solve invocation. Immutable and caller-owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Installation decision per candidate camera.
    pub installed: Vec<bool>,
    /// Coverage decision per zone.
    pub covered: Vec<bool>,
    pub objective: f64,
    /// Remaining optimality gap, when the capability reports one.
    pub gap: Option<f64>,
    pub solve_time: Duration,
    pub status: SolveStatus,
}

impl Solution {
    pub fn installed_indices(&self) -> Vec<usize> {
        self.installed
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn covered_indices(&self) -> Vec<usize> {
        self.covered
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(j, _)| j)
            .collect()
    }
}

/// Assembles the maximal-covering integer program from instance data,
/// the coverage matrix and the cluster partition, and drives a single
/// solve through an injected solving capability.
///
/// Variables: `x_i` (install camera i) and `y_j` (zone j covered), all
/// binary. Objective: maximize sum of `priority_j * population_j * y_j`
/// (plus the optional critical-zone redundancy bonus). Constraints:
/// budget, camera count, per-zone coverage linkage, per-critical-zone
/// redundancy, minimum PTZ share, per-cluster concentration cap.
pub struct CoverageModel {
    instance: ProblemInstance,
    coverage: CoverageMatrix,
    clusters: ClusterAssignment,
    options: ModelOptions,
    description: Option<ModelDescription>,
    state: ModelState,
}

impl CoverageModel {
    /// Validates the inputs and returns an unbuilt model.
    pub fn new(
        instance: ProblemInstance,
        coverage: CoverageMatrix,
        clusters: ClusterAssignment,
        options: ModelOptions,
    ) -> ModelResult<Self> {
        instance.validate()?;
        if coverage.camera_count() != instance.cameras.len()
            || coverage.zone_count() != instance.zones.len()
        {
            return Err(ModelError::Configuration(format!(
                "coverage matrix is {}x{} but instance has {} cameras and {} zones",
                coverage.camera_count(),
                coverage.zone_count(),
                instance.cameras.len(),
                instance.zones.len()
            )));
        }
        if clusters.labels().len() != instance.cameras.len() {
            return Err(ModelError::Configuration(format!(
                "cluster assignment covers {} cameras, instance has {}",
                clusters.labels().len(),
                instance.cameras.len()
            )));
        }
        Ok(Self {
            instance,
            coverage,
            clusters,
            options,
            description: None,
            state: ModelState::Unbuilt,
        })
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn description(&self) -> Option<&ModelDescription> {
        self.description.as_ref()
    }

    /// Assembles variables, objective and constraints. Allowed exactly
    /// once, from the unbuilt state.
    pub fn build(&mut self) -> ModelResult<()> {
        if self.state != ModelState::Unbuilt {
            return Err(ModelError::Configuration(
                "model already built; create a new model to rebuild".to_string(),
            ));
        }

        let n_cameras = self.instance.cameras.len();
        let n_zones = self.instance.zones.len();
        let n_vars = n_cameras + n_zones;

        // x_0..x_{n-1}, then y_0..y_{m-1}.
        let mut variables = Vec::with_capacity(n_vars);
        for (i, camera) in self.instance.cameras.iter().enumerate() {
            let mut var = VariableSpec::binary(format!("x_{i}_cam_{}", camera.kind));
            if self.coverage.zones_reachable(i) == 0 {
                // A camera that reaches nothing is never worth its cost.
                var.upper = 0.0;
            }
            variables.push(var);
        }
        for j in 0..n_zones {
            variables.push(VariableSpec::binary(format!("y_{j}_zone")));
        }

        let mut coefficients = vec![0.0; n_vars];
        for (j, zone) in self.instance.zones.iter().enumerate() {
            coefficients[n_cameras + j] = zone.weight();
        }
        if self.options.redundancy_bonus {
            for (j, zone) in self.instance.zones.iter().enumerate() {
                if zone.priority < CRITICAL_PRIORITY {
                    continue;
                }
                for i in 0..n_cameras {
                    if self.coverage.covers(i, j) {
                        coefficients[i] += 0.1 * zone.weight();
                    }
                }
            }
        }
        let objective = Objective {
            coefficients,
            maximize: true,
        };

        let mut constraints = Vec::new();

        // Total installation cost within budget.
        let mut row = vec![0.0; n_vars];
        for (i, camera) in self.instance.cameras.iter().enumerate() {
            row[i] = camera.cost;
        }
        constraints.push(Constraint {
            name: "budget".to_string(),
            coefficients: row,
            op: ConstraintOp::Le,
            rhs: self.instance.max_budget,
        });

        // Installation count ceiling.
        let mut row = vec![0.0; n_vars];
        for cell in row.iter_mut().take(n_cameras) {
            *cell = 1.0;
        }
        constraints.push(Constraint {
            name: "camera_count".to_string(),
            coefficients: row,
            op: ConstraintOp::Le,
            rhs: self.instance.max_cameras as f64,
        });

        // A zone counts as covered only if an installed camera reaches
        // it. An all-false column forces y_j to zero here no matter how
        // high the zone's priority is.
        for j in 0..n_zones {
            let mut row = vec![0.0; n_vars];
            row[n_cameras + j] = 1.0;
            for i in 0..n_cameras {
                if self.coverage.covers(i, j) {
                    row[i] = -1.0;
                }
            }
            constraints.push(Constraint {
                name: format!("coverage_zone_{j}"),
                coefficients: row,
                op: ConstraintOp::Le,
                rhs: 0.0,
            });
        }

        // Covered high-priority zones need two reaching cameras.
        for (j, zone) in self.instance.zones.iter().enumerate() {
            if zone.priority < self.instance.redundancy_threshold {
                continue;
            }
            let mut row = vec![0.0; n_vars];
            for i in 0..n_cameras {
                if self.coverage.covers(i, j) {
                    row[i] = 1.0;
                }
            }
            row[n_cameras + j] = -2.0;
            constraints.push(Constraint {
                name: format!("redundancy_zone_{j}"),
                coefficients: row,
                op: ConstraintOp::Ge,
                rhs: 0.0,
            });
        }

        // Minimum PTZ share of the installed set, written as
        // sum((1 - f) * x_ptz) - sum(f * x_other) >= 0 so it is
        // vacuous when nothing installs.
        let fraction = self.instance.ptz_min_fraction;
        let mut row = vec![0.0; n_vars];
        for (i, camera) in self.instance.cameras.iter().enumerate() {
            row[i] = if camera.kind == crate::instance::CameraType::Ptz {
                1.0 - fraction
            } else {
                -fraction
            };
        }
        constraints.push(Constraint {
            name: "ptz_share".to_string(),
            coefficients: row,
            op: ConstraintOp::Ge,
            rhs: 0.0,
        });

        // Per-cluster concentration cap, independent of how many
        // candidates fall in the cluster.
        let cap = 2usize.max(self.instance.max_cameras / 3) as f64;
        for cluster in 0..self.clusters.cluster_count() {
            let members = self.clusters.members(cluster);
            if members.is_empty() {
                continue;
            }
            let mut row = vec![0.0; n_vars];
            for i in members {
                row[i] = 1.0;
            }
            constraints.push(Constraint {
                name: format!("cluster_{cluster}_cap"),
                coefficients: row,
                op: ConstraintOp::Le,
                rhs: cap,
            });
        }

        let description = ModelDescription {
            variables,
            objective,
            constraints,
        };
        info!(
            "coverage model built: {} variables, {} constraints, {} clusters",
            description.variable_count(),
            description.constraints.len(),
            self.clusters.cluster_count()
        );
        self.description = Some(description);
        self.state = ModelState::Built;
        Ok(())
    }

    /// Runs one blocking solve through the given capability. Terminal
    /// states are absorbing: afterwards neither build nor solve is
    /// accepted on this model.
    pub fn solve(
        &mut self,
        backend: &dyn SolveCapability,
        config: &SolverConfig,
    ) -> ModelResult<Solution> {
        match self.state {
            ModelState::Built => {}
            ModelState::Unbuilt => {
                return Err(ModelError::Configuration(
                    "model must be built before solving".to_string(),
                ))
            }
            ModelState::Solving | ModelState::Finished(_) => {
                return Err(ModelError::Configuration(
                    "model already solved; build a new model to re-solve".to_string(),
                ))
            }
        }

        let description = self
            .description
            .take()
            .ok_or_else(|| ModelError::Internal("built model has no description".to_string()))?;
        self.state = ModelState::Solving;

        let started = Instant::now();
        let result = backend.solve(&description, config);
        let solve_time = started.elapsed();
        self.description = Some(description);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.state = ModelState::Finished(SolveStatus::Error);
                return Err(err);
            }
        };

        let n_cameras = self.instance.cameras.len();
        let n_zones = self.instance.zones.len();
        let (installed, covered) = match &outcome.assignment {
            Some(values) if values.len() == n_cameras + n_zones => (
                values[..n_cameras].iter().map(|&v| v > 0.5).collect(),
                values[n_cameras..].iter().map(|&v| v > 0.5).collect(),
            ),
            Some(values) => {
                self.state = ModelState::Finished(SolveStatus::Error);
                return Err(ModelError::Internal(format!(
                    "solver returned {} values for {} declared variables",
                    values.len(),
                    n_cameras + n_zones
                )));
            }
            None => (vec![false; n_cameras], vec![false; n_zones]),
        };

        let solution = Solution {
            installed,
            covered,
            objective: outcome.objective.unwrap_or(0.0),
            gap: outcome.gap,
            solve_time,
            status: outcome.status,
        };
        self.state = ModelState::Finished(outcome.status);
        info!(
            "solve finished: status {:?}, objective {:.2}, {} cameras installed, {:.3}s",
            solution.status,
            solution.objective,
            solution.installed.iter().filter(|&&on| on).count(),
            solution.solve_time.as_secs_f64()
        );
        Ok(solution)
    }
}
