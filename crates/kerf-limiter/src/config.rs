//! Limiter configuration.

use crate::bound::EPSILON;
use kerf_core::ConfigError;

/// Tunables for the centroid limiter.
///
/// The defaults match [`bound_ratio`](crate::bound_ratio). Validated by
/// [`SlopeLimiterBuilder::build`](crate::SlopeLimiterBuilder::build);
/// immutable once a limiter is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimiterConfig {
    /// Scale-relative tolerance for the out-of-bounds test, the
    /// bound-ratio guard and the per-axis displacement cutoff.
    /// Default: `1e-12`.
    pub epsilon: f64,

    /// Stop scanning neighbours once every axis scale has reached 0.
    ///
    /// No later neighbour can lower a zero scale, so this only saves
    /// work. Default: `true`.
    pub prune_collapsed: bool,
}

impl LimiterConfig {
    /// Check that `epsilon` is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon {
                value: self.epsilon,
            });
        }
        Ok(())
    }
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            prune_collapsed: true,
        }
    }
}
