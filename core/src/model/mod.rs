pub mod builder;
pub mod description;

pub use builder::{CoverageModel, ModelState, Solution};
pub use description::{Constraint, ConstraintOp, ModelDescription, Objective, VariableSpec};
