use serde::{Deserialize, Serialize};

/// Lowest priority a demand zone may carry.
pub const PRIORITY_MIN: u8 = 1;
/// Highest priority a demand zone may carry.
pub const PRIORITY_MAX: u8 = 10;

/// A demand point to be covered. Immutable once loaded; identified by
/// its index within the instance's zone sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub x: f64,
    pub y: f64,
    pub priority: u8,
    pub population: f64,
    pub description: String,
}

impl Zone {
    pub fn new(x: f64, y: f64, priority: u8, population: f64, description: impl Into<String>) -> Self {
        Self {
            x,
            y,
            priority,
            population,
            description: description.into(),
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Weight of this zone in the coverage objective.
    pub fn weight(&self) -> f64 {
        f64::from(self.priority) * self.population
    }
}
