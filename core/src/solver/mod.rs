pub mod highs;

pub use self::highs::HighsBackend;

use crate::model::ModelDescription;
use crate::prelude::{ModelResult, SolverConfig};
use serde::{Deserialize, Serialize};

/// Terminal outcome of a solve attempt. Infeasibility and timeouts are
/// reported here, never as errors: a caller must be able to tell "no
/// valid layout exists" apart from "the tool could not attempt it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Proven optimal within the configured gap tolerance.
    Optimal,
    /// Time limit reached; the best incumbent found so far is returned.
    SuboptimalWithGap,
    /// No feasible assignment exists under the current constraints.
    Infeasible,
    /// The solver gave up for a reason other than infeasibility.
    Error,
}

/// Raw result handed back by a solving capability.
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    pub status: SolveStatus,
    pub objective: Option<f64>,
    /// One value per declared variable, absent for infeasible or
    /// failed attempts.
    pub assignment: Option<Vec<f64>>,
    pub gap: Option<f64>,
}

/// The external solving capability: a complete model description in,
/// a status plus assignment out. One blocking call per invocation; the
/// configured time limit bounds it. Implementations return
/// `ModelError::SolverUnavailable` when the backing solver cannot be
/// reached at all.
pub trait SolveCapability {
    fn solve(&self, model: &ModelDescription, config: &SolverConfig) -> ModelResult<SolverOutcome>;
}
