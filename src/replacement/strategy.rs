//! Built-in replacement strategies.

use super::types::{Crossover, ReplacementStrategy};
use crate::error::Result;
use crate::population::Individual;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Elitist replacement.
///
/// Copies `parents[..elite_count]` verbatim, then fills the remaining
/// `len - elite_count` slots with children of a shuffled pool, crossing
/// `pool[i]` with `pool[len - 1 - i]` for `i = 0, 1, ...`.
///
/// The strategy does not sort; pass parents best-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elite;

impl<G: Clone> ReplacementStrategy<G> for Elite {
    fn replace(
        &self,
        parents: &[Individual<G>],
        elite_count: usize,
        crossover: &dyn Crossover<G>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<G>> {
        let n = parents.len();
        let elites = elite_count.min(n);

        let mut pool: Vec<&G> = parents.iter().map(|p| &p.genome).collect();
        pool.shuffle(&mut *rng);

        let mut next: Vec<G> = Vec::with_capacity(n);
        next.extend(parents[..elites].iter().map(|p| p.genome.clone()));
        for i in 0..n - elites {
            next.push(crossover.crossover(pool[i], pool[n - 1 - i], rng)?);
        }
        Ok(next)
    }

    fn name(&self) -> &'static str {
        "elite"
    }
}
