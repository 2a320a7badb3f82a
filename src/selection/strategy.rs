//! Selection variants.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::population::Individual;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::{Rng, RngCore};

/// How the [`Selector`](super::Selector) draws each parent.
///
/// Every variant minimizes and draws with replacement, so a parent pool
/// usually contains duplicates.
///
/// ```
/// use u_blackbox::selection::Selection;
///
/// assert_eq!(Selection::default(), Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Best of `k` uniform draws. `k = 1` degenerates to [`Random`](Self::Random).
    Tournament(usize),

    /// One uniform draw.
    Random,

    /// Fitness-proportionate on inverted fitness: weight
    /// `worst - fitness + 1e-10`. Non-finite weights fall back to a
    /// uniform draw.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Index of one drawn parent. `population` must not be empty.
    pub fn pick<G>(&self, population: &[Individual<G>], rng: &mut dyn RngCore) -> usize {
        match *self {
            Selection::Tournament(k) => tournament(population, k, rng),
            Selection::Random => rng.random_range(0..population.len()),
            Selection::Roulette => roulette(population, rng),
        }
    }
}

fn tournament<G>(population: &[Individual<G>], k: usize, rng: &mut dyn RngCore) -> usize {
    let n = population.len();
    (1..k.max(1)).fold(rng.random_range(0..n), |winner, _| {
        let challenger = rng.random_range(0..n);
        if population[challenger].fitness < population[winner].fitness {
            challenger
        } else {
            winner
        }
    })
}

const ROULETTE_FLOOR: f64 = 1e-10;

fn roulette<G>(population: &[Individual<G>], rng: &mut dyn RngCore) -> usize {
    let worst = population
        .iter()
        .map(|ind| ind.fitness)
        .fold(f64::NEG_INFINITY, f64::max);

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| (worst - ind.fitness).max(0.0) + ROULETTE_FLOOR)
        .collect();

    if !weights.iter().all(|w| w.is_finite()) {
        return rng.random_range(0..population.len());
    }
    match WeightedIndex::new(&weights) {
        Ok(wheel) => wheel.sample(rng),
        Err(_) => rng.random_range(0..population.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(fitness: &[f64]) -> Vec<Individual<char>> {
        fitness
            .iter()
            .zip('a'..)
            .map(|(&f, g)| Individual::new(g, f))
            .collect()
    }

    fn histogram(selection: Selection, pop: &[Individual<char>], draws: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(17);
        let mut hits = vec![0; pop.len()];
        for _ in 0..draws {
            hits[selection.pick(pop, &mut rng)] += 1;
        }
        hits
    }

    #[test]
    fn test_large_tournament_almost_always_picks_minimum() {
        let pop = scored(&[4.0, 9.0, -2.0, 3.0, 7.0]);
        let hits = histogram(Selection::Tournament(16), &pop, 2000);
        assert!(hits[2] > 1900, "{hits:?}");
    }

    #[test]
    fn test_tournament_zero_treated_as_one() {
        let pop = scored(&[1.0, 2.0, 3.0]);
        let hits = histogram(Selection::Tournament(0), &pop, 3000);
        assert!(hits.iter().all(|&h| h > 800), "{hits:?}");
    }

    #[test]
    fn test_random_ignores_fitness() {
        let pop = scored(&[0.0, 1e9, 5.0, 5.0]);
        let hits = histogram(Selection::Random, &pop, 4000);
        assert!(hits.iter().all(|&h| h > 850), "{hits:?}");
    }

    #[test]
    fn test_roulette_weights_follow_inverted_fitness() {
        // Weights are 10, 5, ~0: the worst member is practically never drawn.
        let pop = scored(&[0.0, 5.0, 10.0]);
        let hits = histogram(Selection::Roulette, &pop, 3000);
        assert!(hits[0] > hits[1], "{hits:?}");
        assert!(hits[2] < 5, "{hits:?}");
    }

    #[test]
    fn test_roulette_equal_fitness_is_uniform() {
        let pop = scored(&[2.0; 4]);
        let hits = histogram(Selection::Roulette, &pop, 4000);
        assert!(hits.iter().all(|&h| h > 850), "{hits:?}");
    }

    #[test]
    fn test_roulette_non_finite_falls_back() {
        let pop = scored(&[1.0, f64::NAN, f64::INFINITY]);
        let hits = histogram(Selection::Roulette, &pop, 300);
        assert_eq!(hits.iter().sum::<usize>(), 300);
    }

    #[test]
    fn test_singleton_population() {
        let pop = scored(&[3.0]);
        for selection in [Selection::Tournament(4), Selection::Random, Selection::Roulette] {
            assert_eq!(histogram(selection, &pop, 10), vec![10]);
        }
    }
}
