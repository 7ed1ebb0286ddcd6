//! Opaque integer-program description handed to a solving capability.
//!
//! The formulation layer emits plain coefficient vectors so any MIP
//! backend can consume the model without knowing about cameras or
//! zones.

/// One decision variable with its bounds and integrality.
#[derive(Debug, Clone)]
pub struct VariableSpec {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
    pub integer: bool,
}

impl VariableSpec {
    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: 0.0,
            upper: 1.0,
            integer: true,
        }
    }
}

/// Linear objective over the declared variables.
#[derive(Debug, Clone)]
pub struct Objective {
    pub coefficients: Vec<f64>,
    pub maximize: bool,
}

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    Le,
    Ge,
    Eq,
}

/// One named linear constraint, dense over the variable vector.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub op: ConstraintOp,
    pub rhs: f64,
}

/// Complete model: variable declarations, one objective, constraints.
#[derive(Debug, Clone)]
pub struct ModelDescription {
    pub variables: Vec<VariableSpec>,
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
}

impl ModelDescription {
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }
}
