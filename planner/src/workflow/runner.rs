use crate::workflow::config::PlanConfig;
use anyhow::Context;
use camoptcore::clustering::ClusterAssignment;
use camoptcore::geometry::CoverageMatrix;
use camoptcore::instance::ProblemInstance;
use camoptcore::prelude::ModelOptions;
use camoptcore::report::{CoverageReport, SolutionInterpreter};
use camoptcore::solver::HighsBackend;
use camoptcore::{CoverageModel, Solution};
use log::info;

pub struct PlanOutcome {
    pub solution: Solution,
    pub report: CoverageReport,
    pub cluster_count: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: PlanConfig,
}

impl Runner {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Derives coverage and clusters, builds the integer program,
    /// solves it and interprets the assignment.
    pub fn execute(&self, instance: &ProblemInstance) -> anyhow::Result<PlanOutcome> {
        let mut instance = instance.clone();
        self.config.apply_policy(&mut instance);
        instance
            .validate()
            .context("validating problem instance")?;

        info!(
            "planning {} zones with {} candidate sites, budget {:.0}, ceiling {}",
            instance.zones.len(),
            instance.cameras.len(),
            instance.max_budget,
            instance.max_cameras
        );

        let coverage = CoverageMatrix::compute(&instance.cameras, &instance.zones);
        let clusters = ClusterAssignment::compute(&instance.cameras, instance.cluster_count);
        let cluster_count = clusters.cluster_count();

        let options = ModelOptions {
            redundancy_bonus: self.config.redundancy_bonus,
        };
        let mut model = CoverageModel::new(instance.clone(), coverage.clone(), clusters, options)
            .context("preparing coverage model")?;
        model.build().context("assembling integer program")?;

        let solution = model
            .solve(&HighsBackend::default(), &self.config.to_solver_config())
            .context("invoking solver")?;
        let report = SolutionInterpreter::summarize(&instance, &coverage, &solution);

        Ok(PlanOutcome {
            solution,
            report,
            cluster_count,
        })
    }
}
