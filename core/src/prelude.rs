use serde::{Deserialize, Serialize};

/// Optional behaviour toggles for model construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Add the objective bonus rewarding multi-camera coverage of
    /// critical zones. Feasibility is unchanged either way.
    pub redundancy_bonus: bool,
}

/// Parameters handed to the solving capability for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock limit in seconds; the best incumbent is returned on
    /// expiry rather than discarded.
    pub time_limit_secs: f64,
    /// Relative optimality gap at which the search may stop.
    pub mip_gap: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 300.0,
            mip_gap: 0.01,
        }
    }
}

/// Common error type for formulation, persistence and solver access.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("instance format: {0}")]
    Format(#[from] serde_json::Error),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
