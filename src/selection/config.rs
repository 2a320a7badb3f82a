//! Selector configuration.

use super::strategy::Selection;
use crate::error::{Result, SearchError};

/// Configuration for the [`Selector`](super::Selector).
///
/// # Defaults
///
/// ```
/// use u_blackbox::selection::{Selection, SelectorConfig};
///
/// let config = SelectorConfig::default();
/// assert_eq!(config.selection_count, 0);
/// assert_eq!(config.selection, Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorConfig {
    /// Number of parents drawn per call.
    ///
    /// `0` means "as many as the population has members".
    pub selection_count: usize,

    /// Strategy used for each draw.
    pub selection: Selection,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            selection_count: 0,
            selection: Selection::default(),
        }
    }
}

impl SelectorConfig {
    /// Sets the number of parents drawn per call.
    pub fn with_selection_count(mut self, n: usize) -> Self {
        self.selection_count = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.selection == Selection::Tournament(0) {
            return Err(SearchError::InvalidConfig(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let config = SelectorConfig::default()
            .with_selection_count(40)
            .with_tournament_size(5);
        assert_eq!(config.selection_count, 40);
        assert_eq!(config.selection, Selection::Tournament(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = SelectorConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }
}
