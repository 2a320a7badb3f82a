//! Evaluated individuals and population helpers.
//!
//! An [`Individual`] is a genome paired with the fitness it was scored at.
//! It is created once per evaluation and never modified afterwards.

use crate::error::{Result, SearchError};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// A genome together with its fitness. Lower fitness is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<G> {
    /// The candidate solution.
    pub genome: G,

    /// Fitness of `genome` at evaluation time.
    pub fitness: f64,
}

impl<G> Individual<G> {
    /// Pairs a genome with its fitness.
    pub fn new(genome: G, fitness: f64) -> Self {
        Self { genome, fitness }
    }
}

/// Returns the individual with the lowest fitness.
///
/// Ties go to the earliest member. NaN fitness never wins against a number.
pub fn best_of<G>(population: &[Individual<G>]) -> Result<&Individual<G>> {
    population
        .iter()
        .reduce(|best, ind| {
            if ind.fitness < best.fitness || (best.fitness.is_nan() && !ind.fitness.is_nan()) {
                ind
            } else {
                best
            }
        })
        .ok_or(SearchError::EmptyPopulation)
}

/// Sorts individuals best-first. The sort is stable and puts NaN fitness
/// last regardless of its sign bit.
pub fn sort_by_fitness<G>(population: &mut [Individual<G>]) {
    population.sort_by(|a, b| {
        a.fitness
            .partial_cmp(&b.fitness)
            .unwrap_or_else(|| a.fitness.is_nan().cmp(&b.fitness.is_nan()))
    });
}

/// Uniformly random bit vector of length `len`.
pub fn random_bits(len: usize, rng: &mut dyn RngCore) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..=1u8)).collect()
}

/// Uniformly random permutation of `0..n`.
pub fn random_permutation(n: usize, rng: &mut dyn RngCore) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Builds `count` genomes with `create`.
///
/// ```
/// use rand::SeedableRng;
/// use u_blackbox::population::{populate, random_bits};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let population = populate(5, &mut rng, |rng| random_bits(12, rng));
/// assert_eq!(population.len(), 5);
/// assert!(population.iter().all(|g| g.len() == 12));
/// ```
pub fn populate<G>(
    count: usize,
    rng: &mut dyn RngCore,
    mut create: impl FnMut(&mut dyn RngCore) -> G,
) -> Vec<G> {
    (0..count).map(|_| create(&mut *rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn individuals(fitnesses: &[f64]) -> Vec<Individual<usize>> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual::new(i, f))
            .collect()
    }

    #[test]
    fn test_best_of_is_true_minimum() {
        let pop = individuals(&[4.0, 2.0, 7.0, 1.0, 3.0]);
        assert_eq!(best_of(&pop).unwrap().genome, 3);
    }

    #[test]
    fn test_best_of_first_on_ties() {
        let pop = individuals(&[2.0, 1.0, 1.0]);
        assert_eq!(best_of(&pop).unwrap().genome, 1);
    }

    #[test]
    fn test_best_of_skips_nan() {
        let pop = individuals(&[f64::NAN, 5.0]);
        assert_eq!(best_of(&pop).unwrap().genome, 1);
    }

    #[test]
    fn test_best_of_empty() {
        let pop: Vec<Individual<usize>> = vec![];
        assert_eq!(best_of(&pop), Err(SearchError::EmptyPopulation));
    }

    #[test]
    fn test_sort_by_fitness() {
        let mut pop = individuals(&[3.0, 1.0, 2.0]);
        sort_by_fitness(&mut pop);
        let order: Vec<usize> = pop.iter().map(|i| i.genome).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_puts_nan_last() {
        let inf = std::hint::black_box(f64::INFINITY);
        let computed_nan = inf - inf;
        let mut pop = individuals(&[1.0, computed_nan, 0.5, -f64::NAN, f64::NAN, -3.0]);
        sort_by_fitness(&mut pop);
        let order: Vec<usize> = pop.iter().map(|i| i.genome).collect();
        assert_eq!(order, vec![5, 2, 0, 1, 3, 4]);
        assert_eq!(best_of(&pop).unwrap().genome, 5);
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = random_permutation(20, &mut rng);
        perm.sort_unstable();
        assert_eq!(perm, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_bits_binary() {
        let mut rng = StdRng::seed_from_u64(42);
        let bits = random_bits(64, &mut rng);
        assert_eq!(bits.len(), 64);
        assert!(bits.iter().all(|&b| b <= 1));
        assert!(bits.contains(&0) && bits.contains(&1));
    }
}
