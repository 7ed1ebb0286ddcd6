use anyhow::Context;
use camoptcore::instance::ProblemInstance;
use clap::Parser;
use generator::scenario::{build_instance, GeneratorConfig};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use workflow::config::PlanConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Camera placement planning driver")]
struct Args {
    /// Load a problem instance from JSON instead of generating one
    #[arg(long)]
    instance: Option<PathBuf>,
    /// Load run parameters from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Zones to generate when no instance file is given
    #[arg(long, default_value_t = 20)]
    zones: usize,
    /// Candidate camera sites to generate
    #[arg(long, default_value_t = 15)]
    cameras: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write the instance that was solved back out as JSON
    #[arg(long)]
    export: Option<PathBuf>,
    /// Write the coverage report as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plan_config = if let Some(path) = args.config {
        PlanConfig::load(path)?
    } else {
        PlanConfig::default()
    };

    let instance = if let Some(path) = &args.instance {
        ProblemInstance::load(path)
            .with_context(|| format!("loading instance {}", path.display()))?
    } else {
        let generator = GeneratorConfig {
            zones: args.zones,
            cameras: args.cameras,
            seed: args.seed,
            ..Default::default()
        };
        build_instance(&generator, &plan_config)?
    };

    if let Some(path) = &args.export {
        instance
            .save(path)
            .with_context(|| format!("exporting instance {}", path.display()))?;
    }

    let runner = Runner::new(plan_config);
    let outcome = runner.execute(&instance)?;

    println!(
        "Solve -> status {:?}, objective {:.1}, {:.2}s",
        outcome.solution.status,
        outcome.solution.objective,
        outcome.solution.solve_time.as_secs_f64()
    );
    println!(
        "Coverage {:.1}% ({} of {} zones), {} cameras installed across {} clusters",
        outcome.report.coverage_rate * 100.0,
        outcome.report.covered_count,
        instance.zones.len(),
        outcome.report.installed_count,
        outcome.cluster_count
    );
    println!(
        "Budget {:.0} of {:.0} ({:.1}%), mean redundancy {:.2}, types fixed/ptz/thermal {}/{}/{}",
        outcome.report.total_cost,
        instance.max_budget,
        outcome.report.budget_utilization * 100.0,
        outcome.report.mean_redundancy,
        outcome.report.cameras_by_type.fixed,
        outcome.report.cameras_by_type.ptz,
        outcome.report.cameras_by_type.thermal
    );

    if let Some(path) = &args.report_json {
        let rendered = serde_json::to_string_pretty(&outcome.report)
            .context("serializing coverage report")?;
        fs::write(path, rendered)
            .with_context(|| format!("writing coverage report {}", path.display()))?;
    }

    let summary = format!(
        "status={:?} objective={:.1} installed={} covered={}/{} cost={:.0} utilization={:.3}\n",
        outcome.solution.status,
        outcome.solution.objective,
        outcome.report.installed_count,
        outcome.report.covered_count,
        instance.zones.len(),
        outcome.report.total_cost,
        outcome.report.budget_utilization
    );
    let report_path = PathBuf::from("tools/data/plan_summary.log");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_path)?;
    file.write_all(summary.as_bytes())?;

    Ok(())
}
