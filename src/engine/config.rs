//! Engine configuration.

use crate::error::{Result, SearchError};

/// Configuration for the [`SearchEngine`](super::SearchEngine).
///
/// # Examples
///
/// ```
/// use u_blackbox::engine::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(42).with_name("baseline");
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.name.as_deref(), Some("baseline"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Display name copied into results produced by
    /// [`run`](super::SearchEngine::run).
    pub name: Option<String>,
}

impl EngineConfig {
    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref() == Some("") {
            return Err(SearchError::InvalidConfig(
                "name must not be empty; use None instead".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.seed.is_none());
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(EngineConfig::default().with_name("").validate().is_err());
    }
}
