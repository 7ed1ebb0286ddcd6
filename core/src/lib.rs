//! Coverage formulation and solution-analysis core for the camera
//! placement planner.
//!
//! The modules follow the data flow of the planning pipeline: instance
//! data feeds geometry/coverage derivation and clustering, the model
//! layer assembles the integer program, a solving capability produces an
//! assignment, and the report layer turns it back into metrics.

pub mod clustering;
pub mod geometry;
pub mod instance;
pub mod model;
pub mod prelude;
pub mod report;
pub mod solver;

pub use model::{CoverageModel, Solution};
pub use prelude::{ModelError, ModelOptions, ModelResult, SolverConfig};
pub use solver::SolveStatus;
