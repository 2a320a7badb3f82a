//! Core traits for recombination and replacement.

use crate::error::Result;
use crate::population::Individual;
use rand::RngCore;

/// Recombines two parent genomes into one child.
///
/// Closures `Fn(&G, &G, &mut dyn RngCore) -> Result<G>` implement this
/// trait automatically.
pub trait Crossover<G> {
    /// Produces one child from `a` and `b`.
    fn crossover(&self, a: &G, b: &G, rng: &mut dyn RngCore) -> Result<G>;

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<G, F> Crossover<G> for F
where
    F: Fn(&G, &G, &mut dyn RngCore) -> Result<G>,
{
    fn crossover(&self, a: &G, b: &G, rng: &mut dyn RngCore) -> Result<G> {
        self(a, b, rng)
    }
}

/// Builds the next raw (unevaluated) generation from selected parents.
///
/// # Contract
///
/// The output has exactly `parents.len()` genomes. Callers that want
/// elitism to keep the best parents must pass `parents` sorted best-first.
pub trait ReplacementStrategy<G> {
    /// Produces the next generation.
    fn replace(
        &self,
        parents: &[Individual<G>],
        elite_count: usize,
        crossover: &dyn Crossover<G>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<G>>;

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
