//! Mutator configuration.

use crate::error::{Result, SearchError};

/// Parameters handed to the wrapped perturbation.
///
/// Only one of the two values is used per perturbation, depending on its
/// [`ParameterKind`](super::ParameterKind).
///
/// ```
/// use u_blackbox::mutation::MutatorConfig;
///
/// let config = MutatorConfig::default()
///     .with_probability(0.05)
///     .with_deviation(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutatorConfig {
    /// Per-gene mutation probability (0.0–1.0).
    pub probability: f64,

    /// Step size for deviation-driven perturbations.
    pub deviation: f64,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            probability: 0.1,
            deviation: 1.0,
        }
    }
}

impl MutatorConfig {
    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_probability(mut self, p: f64) -> Self {
        self.probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the deviation.
    pub fn with_deviation(mut self, sigma: f64) -> Self {
        self.deviation = sigma;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(SearchError::InvalidConfig(format!(
                "probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        if !self.deviation.is_finite() || self.deviation <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "deviation must be positive and finite, got {}",
                self.deviation
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MutatorConfig::default();
        assert!((config.probability - 0.1).abs() < 1e-12);
        assert!((config.deviation - 1.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_probability_clamped() {
        assert_eq!(MutatorConfig::default().with_probability(1.5).probability, 1.0);
        assert_eq!(MutatorConfig::default().with_probability(-0.5).probability, 0.0);
    }

    #[test]
    fn test_validate_bad_deviation() {
        assert!(MutatorConfig::default().with_deviation(0.0).validate().is_err());
        assert!(MutatorConfig::default()
            .with_deviation(f64::NAN)
            .validate()
            .is_err());
    }
}
