//! Parent selection wrapper.

use super::config::SelectorConfig;
use crate::error::{Result, SearchError};
use crate::population::Individual;
use rand::RngCore;

/// Draws a parent pool from an evaluated population.
///
/// Stateless apart from its configuration.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_blackbox::population::Individual;
/// use u_blackbox::selection::{Selector, SelectorConfig};
///
/// let population: Vec<Individual<u32>> =
///     (0..10).map(|i| Individual::new(i, i as f64)).collect();
/// let selector = Selector::new(SelectorConfig::default().with_selection_count(4));
/// let mut rng = rand::rngs::StdRng::seed_from_u64(5);
/// let parents = selector.select(&population, &mut rng).unwrap();
/// assert_eq!(parents.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Creates a selector.
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Mutable access, e.g. to change the tournament size between runs.
    pub fn config_mut(&mut self) -> &mut SelectorConfig {
        &mut self.config
    }

    /// Selects `selection_count` individuals (duplicates permitted).
    pub fn select<G: Clone>(
        &self,
        population: &[Individual<G>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Individual<G>>> {
        if population.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        self.config.validate()?;

        let count = match self.config.selection_count {
            0 => population.len(),
            n => n,
        };
        Ok((0..count)
            .map(|_| population[self.config.selection.pick(population, rng)].clone())
            .collect())
    }

    /// Name used in logs.
    pub fn name(&self) -> String {
        format!("{:?}", self.config.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(n: usize) -> Vec<Individual<usize>> {
        (0..n).map(|i| Individual::new(i, i as f64)).collect()
    }

    #[test]
    fn test_count_defaults_to_population_size() {
        let selector = Selector::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(selector.select(&population(9), &mut rng).unwrap().len(), 9);
    }

    #[test]
    fn test_explicit_count() {
        let selector = Selector::new(SelectorConfig::default().with_selection_count(25));
        let mut rng = StdRng::seed_from_u64(1);
        let parents = selector.select(&population(5), &mut rng).unwrap();
        assert_eq!(parents.len(), 25);
        assert!(parents.iter().all(|p| p.genome < 5));
    }

    #[test]
    fn test_full_tournament_pressure() {
        // Tournament of 200 draws over 4 members almost surely includes index 0.
        let selector = Selector::new(
            SelectorConfig::default()
                .with_selection_count(10)
                .with_tournament_size(200),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let parents = selector.select(&population(4), &mut rng).unwrap();
        assert!(parents.iter().all(|p| p.genome == 0));
    }

    #[test]
    fn test_random_selection_members_come_from_population() {
        let selector = Selector::new(SelectorConfig::default().with_selection(Selection::Random));
        let mut rng = StdRng::seed_from_u64(3);
        let pop = population(6);
        for parent in selector.select(&pop, &mut rng).unwrap() {
            assert!(pop.contains(&parent));
        }
    }

    #[test]
    fn test_empty_population() {
        let selector = Selector::default();
        let mut rng = StdRng::seed_from_u64(1);
        let pop: Vec<Individual<usize>> = vec![];
        assert_eq!(
            selector.select(&pop, &mut rng),
            Err(SearchError::EmptyPopulation)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let selector = Selector::new(SelectorConfig::default().with_tournament_size(0));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            selector.select(&population(3), &mut rng),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
