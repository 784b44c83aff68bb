//! Per-call cost parameters.

use crate::error::{GhdError, Result};

/// Insertion cost `ci`, deletion cost `cd` and shift coefficient `a`.
///
/// Shifting a bit from position `i` to `j` costs `a * |i - j|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostParameters {
    pub ci: f64,
    pub cd: f64,
    pub a: f64,
}

impl CostParameters {
    /// Build and validate a parameter set.
    pub fn new(ci: f64, cd: f64, a: f64) -> Result<Self> {
        let costs = Self { ci, cd, a };
        costs.validate()?;
        Ok(costs)
    }

    /// Equal insertion and deletion cost.
    pub fn symmetric(c: f64, a: f64) -> Result<Self> {
        Self::new(c, c, a)
    }

    /// Reject negative, NaN and infinite values.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("ci", self.ci), ("cd", self.cd), ("a", self.a)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GhdError::InvalidCost { name, value });
            }
        }
        Ok(())
    }
}
