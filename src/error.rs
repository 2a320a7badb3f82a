//! Error type shared by every strategy and the search engine.
//!
//! Errors only originate in strategies (objectives, mappings, perturbations,
//! crossover) or in missing configuration. The engine never recovers from
//! them: the in-progress run is aborted and the error is returned as-is.

/// Failure raised by a strategy or by the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Two sequences that must line up have different lengths.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length required by the strategy.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A genome or parameter holds a value outside the strategy's domain.
    #[error("invalid domain value: {0}")]
    InvalidDomain(String),

    /// An algorithm needed a strategy the engine was not configured with.
    #[error("missing strategy: {0}")]
    MissingStrategy(&'static str),

    /// A population-based operation received no individuals.
    #[error("population must not be empty")]
    EmptyPopulation,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SearchError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");
        assert_eq!(
            SearchError::MissingStrategy("selector").to_string(),
            "missing strategy: selector"
        );
        assert_eq!(
            SearchError::EmptyPopulation.to_string(),
            "population must not be empty"
        );
    }
}
