//! Replacement wrapper used by the engine.

use super::types::{Crossover, ReplacementStrategy};
use crate::error::{Result, SearchError};
use crate::population::Individual;
use rand::RngCore;

/// Configuration for the [`Replacer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplacerConfig {
    /// Number of leading parents copied unchanged into the next generation.
    pub elite_count: usize,
}

impl ReplacerConfig {
    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Every elite count is accepted: counts above the parent count keep
    /// all parents and breed no children.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Owns one replacement strategy and one crossover operator.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_blackbox::population::Individual;
/// use u_blackbox::replacement::{Elite, Replacer, ReplacerConfig, SinglePoint};
///
/// let replacer = Replacer::new(Elite, SinglePoint)
///     .with_config(ReplacerConfig::default().with_elite_count(1));
/// let parents = vec![
///     Individual::new(vec![0u8, 0, 0], 0.0),
///     Individual::new(vec![1u8, 1, 1], 3.0),
/// ];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let next = replacer.replace(&parents, &mut rng).unwrap();
/// assert_eq!(next.len(), 2);
/// assert_eq!(next[0], vec![0, 0, 0]);
/// ```
pub struct Replacer<G> {
    strategy: Box<dyn ReplacementStrategy<G>>,
    crossover: Box<dyn Crossover<G>>,
    config: ReplacerConfig,
}

impl<G> Replacer<G> {
    /// Wraps `strategy` and `crossover` with no elites.
    pub fn new(
        strategy: impl ReplacementStrategy<G> + 'static,
        crossover: impl Crossover<G> + 'static,
    ) -> Self {
        Self {
            strategy: Box::new(strategy),
            crossover: Box::new(crossover),
            config: ReplacerConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ReplacerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ReplacerConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut ReplacerConfig {
        &mut self.config
    }

    /// Builds the next raw generation from `parents` (best-first).
    ///
    /// The output always has `parents.len()` genomes.
    pub fn replace(&self, parents: &[Individual<G>], rng: &mut dyn RngCore) -> Result<Vec<G>> {
        self.config.validate()?;
        let next = self
            .strategy
            .replace(parents, self.config.elite_count, self.crossover.as_ref(), rng)?;
        if next.len() != parents.len() {
            return Err(SearchError::DimensionMismatch {
                expected: parents.len(),
                actual: next.len(),
            });
        }
        Ok(next)
    }

    /// Name used in logs.
    pub fn name(&self) -> String {
        format!(
            "{}, crossover: {}, elite count: {}",
            self.strategy.name(),
            self.crossover.name(),
            self.config.elite_count
        )
    }
}

impl<G> std::fmt::Debug for Replacer<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Replacer")
            .field("strategy", &self.strategy.name())
            .field("crossover", &self.crossover.name())
            .field("config", &self.config)
            .finish()
    }
}
