//! Carousel Greedy configuration.

use super::tie_break::TieBreak;
use crate::error::{CgError, Result};

/// Configuration parameters for a Carousel Greedy run.
///
/// # Examples
///
/// ```
/// use carousel_greedy::cg::{CgConfig, TieBreak};
///
/// let config = CgConfig::default()
///     .with_alpha(20)
///     .with_beta(0.2)
///     .with_tie_break(TieBreak::First)
///     .with_seed(7);
/// assert_eq!(config.alpha, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CgConfig {
    /// Carousel iterations as a multiple of the greedy solution size.
    pub alpha: usize,
    /// Fraction of the greedy solution's tail discarded before the
    /// carousel phase, in (0, 1].
    pub beta: f64,
    /// Random seed (None for the fixed default of 42).
    pub seed: Option<u64>,
    /// How ties among best-scored candidates are broken.
    pub tie_break: TieBreak,
}

impl Default for CgConfig {
    fn default() -> Self {
        Self {
            alpha: 10,
            beta: 0.1,
            seed: None,
            tie_break: TieBreak::default(),
        }
    }
}

impl CgConfig {
    /// Sets the iteration multiplier.
    pub fn with_alpha(mut self, alpha: usize) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the strip fraction.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_parameters(self.alpha, self.beta)
    }
}

/// Checks `alpha > 0` and `0 < beta <= 1`.
pub(crate) fn validate_parameters(alpha: usize, beta: f64) -> Result<()> {
    if alpha == 0 {
        return Err(CgError::InvalidParameter("alpha must be positive".into()));
    }
    if !(beta > 0.0 && beta <= 1.0) {
        return Err(CgError::InvalidParameter(format!(
            "beta must be in (0, 1], got {beta}"
        )));
    }
    Ok(())
}
