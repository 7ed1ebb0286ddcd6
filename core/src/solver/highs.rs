//! HiGHS-backed solving capability.
//!
//! Binds the opaque model description to the open-source HiGHS MIP
//! solver. Statuses map onto [`SolveStatus`]: a time-limit stop keeps
//! the incumbent and reports `SuboptimalWithGap` instead of failing.

use crate::model::{ConstraintOp, ModelDescription};
use crate::prelude::{ModelResult, SolverConfig};
use crate::solver::{SolveCapability, SolveStatus, SolverOutcome};
use highs::{Col, HighsModelStatus, RowProblem, Sense};
use log::{debug, warn};

#[derive(Debug, Default, Clone)]
pub struct HighsBackend;

impl SolveCapability for HighsBackend {
    fn solve(&self, model: &ModelDescription, config: &SolverConfig) -> ModelResult<SolverOutcome> {
        let mut problem = RowProblem::new();

        let mut cols: Vec<Col> = Vec::with_capacity(model.variables.len());
        for (idx, var) in model.variables.iter().enumerate() {
            let factor = model.objective.coefficients.get(idx).copied().unwrap_or(0.0);
            cols.push(problem.add_column_with_integrality(
                factor,
                var.lower..=var.upper,
                var.integer,
            ));
        }

        for constraint in &model.constraints {
            let terms: Vec<(Col, f64)> = constraint
                .coefficients
                .iter()
                .enumerate()
                .filter(|(_, &factor)| factor.abs() > 1e-10)
                .map(|(idx, &factor)| (cols[idx], factor))
                .collect();
            match constraint.op {
                ConstraintOp::Le => problem.add_row(..=constraint.rhs, terms),
                ConstraintOp::Ge => problem.add_row(constraint.rhs.., terms),
                ConstraintOp::Eq => problem.add_row(constraint.rhs..=constraint.rhs, terms),
            };
        }

        let sense = if model.objective.maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };
        let mut solver = problem.optimise(sense);
        solver.set_option("time_limit", config.time_limit_secs);
        solver.set_option("mip_rel_gap", config.mip_gap);
        solver.set_option("output_flag", false);

        let solved = solver.solve();
        let status = solved.status();
        debug!("HiGHS finished with status {:?}", status);

        match status {
            HighsModelStatus::Optimal | HighsModelStatus::ModelEmpty => {
                let values = solved.get_solution();
                let assignment: Vec<f64> = cols.iter().map(|&col| values[col]).collect();
                Ok(SolverOutcome {
                    status: SolveStatus::Optimal,
                    objective: Some(solved.objective_value()),
                    assignment: Some(assignment),
                    gap: None,
                })
            }
            HighsModelStatus::ReachedTimeLimit => {
                // The incumbent found so far is kept, never discarded.
                // This binding does not expose the achieved gap.
                warn!("time limit reached, returning best incumbent");
                let values = solved.get_solution();
                let assignment: Vec<f64> = cols.iter().map(|&col| values[col]).collect();
                Ok(SolverOutcome {
                    status: SolveStatus::SuboptimalWithGap,
                    objective: Some(solved.objective_value()),
                    assignment: Some(assignment),
                    gap: None,
                })
            }
            HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(SolverOutcome {
                    status: SolveStatus::Infeasible,
                    objective: None,
                    assignment: None,
                    gap: None,
                })
            }
            other => {
                warn!("HiGHS returned unexpected status {:?}", other);
                Ok(SolverOutcome {
                    status: SolveStatus::Error,
                    objective: None,
                    assignment: None,
                    gap: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::ClusterAssignment;
    use crate::geometry::CoverageMatrix;
    use crate::instance::{CameraSite, CameraType, ProblemInstance, ViewAngle, Zone};
    use crate::model::{CoverageModel, Solution};
    use crate::prelude::ModelOptions;

    fn camera(x: f64, y: f64, cost: f64, range: f64, kind: CameraType) -> CameraSite {
        CameraSite::new(x, y, cost, range, ViewAngle::Deg360, kind)
    }

    fn solve(instance: &ProblemInstance) -> (Solution, CoverageMatrix) {
        let coverage = CoverageMatrix::compute(&instance.cameras, &instance.zones);
        let clusters = ClusterAssignment::compute(&instance.cameras, instance.cluster_count);
        let mut model = CoverageModel::new(
            instance.clone(),
            coverage.clone(),
            clusters,
            ModelOptions::default(),
        )
        .unwrap();
        model.build().unwrap();
        let solution = model
            .solve(&HighsBackend::default(), &SolverConfig::default())
            .unwrap();
        (solution, coverage)
    }

    #[test]
    fn critical_zones_get_two_covering_cameras() {
        let instance = ProblemInstance::new(
            vec![
                Zone::new(0.0, 0.0, 2, 100.0, "low"),
                Zone::new(10.0, 0.0, 8, 100.0, "high"),
                Zone::new(20.0, 0.0, 9, 100.0, "critical"),
            ],
            vec![
                camera(5.0, 0.0, 1000.0, 50.0, CameraType::Ptz),
                camera(15.0, 0.0, 1000.0, 50.0, CameraType::Fixed),
            ],
            5000.0,
            2,
        );
        let (solution, coverage) = solve(&instance);

        assert_eq!(solution.status, SolveStatus::Optimal);
        assert_eq!(solution.covered, vec![true, true, true]);
        for j in [1usize, 2] {
            assert!(coverage.installed_redundancy(j, &solution.installed) >= 2);
        }
        assert!(coverage.installed_redundancy(0, &solution.installed) >= 1);
    }

    #[test]
    fn single_unreachable_zone_yields_empty_optimal_solution() {
        let instance = ProblemInstance::new(
            vec![Zone::new(0.0, 0.0, 10, 500.0, "isolated")],
            vec![camera(100.0, 0.0, 1000.0, 10.0, CameraType::Ptz)],
            10_000.0,
            1,
        );
        let coverage = CoverageMatrix::compute(&instance.cameras, &instance.zones);
        assert!(!coverage.covers(0, 0));

        let (solution, _) = solve(&instance);
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!(solution.objective.abs() < 1e-9);
        assert!(solution.installed_indices().is_empty());
        assert!(solution.covered_indices().is_empty());
    }

    #[test]
    fn budget_below_cheapest_camera_installs_nothing() {
        let instance = ProblemInstance::new(
            vec![Zone::new(0.0, 0.0, 3, 100.0, "gate")],
            vec![
                camera(0.0, 0.0, 3000.0, 50.0, CameraType::Ptz),
                camera(1.0, 0.0, 4000.0, 50.0, CameraType::Fixed),
            ],
            2500.0,
            2,
        );
        let (solution, _) = solve(&instance);
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!(solution.installed_indices().is_empty());
        assert!(solution.objective.abs() < 1e-9);
    }

    #[test]
    fn ample_budget_and_reach_cover_every_zone() {
        let mut instance = ProblemInstance::new(
            vec![
                Zone::new(0.0, 0.0, 2, 50.0, "a"),
                Zone::new(30.0, 0.0, 3, 60.0, "b"),
                Zone::new(60.0, 0.0, 4, 70.0, "c"),
            ],
            vec![
                camera(10.0, 0.0, 1000.0, 100.0, CameraType::Ptz),
                camera(50.0, 0.0, 1000.0, 100.0, CameraType::Fixed),
            ],
            100_000.0,
            2,
        );
        // Keep redundancy out of play for this property.
        instance.redundancy_threshold = 7;

        let (solution, _) = solve(&instance);
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert_eq!(solution.covered, vec![true, true, true]);
        let expected = 2.0 * 50.0 + 3.0 * 60.0 + 4.0 * 70.0;
        assert!((solution.objective - expected).abs() < 1e-6);
    }

    #[test]
    fn unreachable_zone_stays_uncovered_regardless_of_priority() {
        let instance = ProblemInstance::new(
            vec![
                Zone::new(0.0, 0.0, 3, 100.0, "near"),
                Zone::new(1000.0, 0.0, 10, 900.0, "far"),
            ],
            vec![
                camera(0.0, 0.0, 1000.0, 50.0, CameraType::Ptz),
                camera(5.0, 0.0, 1000.0, 50.0, CameraType::Fixed),
            ],
            10_000.0,
            2,
        );
        let (solution, _) = solve(&instance);
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!(solution.covered[0]);
        assert!(!solution.covered[1]);
    }

    #[test]
    fn identical_instances_solve_to_identical_objectives() {
        let instance = ProblemInstance::new(
            vec![
                Zone::new(0.0, 0.0, 6, 120.0, "a"),
                Zone::new(40.0, 0.0, 4, 80.0, "b"),
            ],
            vec![
                camera(0.0, 0.0, 2000.0, 60.0, CameraType::Ptz),
                camera(20.0, 0.0, 2500.0, 60.0, CameraType::Fixed),
                camera(40.0, 0.0, 1800.0, 60.0, CameraType::Ptz),
            ],
            10_000.0,
            3,
        );
        let (first, _) = solve(&instance);
        let (second, _) = solve(&instance);
        assert_eq!(first.status, SolveStatus::Optimal);
        assert_eq!(first.objective, second.objective);
    }
}
