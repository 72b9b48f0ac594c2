//! Solver configuration.

use crate::error::{BalanceError, BalanceResult};
use tb_core::Real;

/// Balance solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceConfig {
    /// Residual (W) at or below which the room counts as balanced
    pub tolerance: Real,
    /// Hard iteration cap
    pub max_iterations: usize,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 1000,
        }
    }
}

impl BalanceConfig {
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> BalanceResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(BalanceError::InvalidParameters {
                what: format!(
                    "tolerance must be finite and non-negative, got {}",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BalanceConfig::default();
        assert_eq!(cfg.tolerance, 1e-3);
        assert_eq!(cfg.max_iterations, 1000);
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [-1e-3, Real::NAN, Real::INFINITY] {
            let cfg = BalanceConfig::default().with_tolerance(tol);
            assert!(matches!(
                cfg.validate(),
                Err(BalanceError::InvalidParameters { .. })
            ));
        }
    }
}
