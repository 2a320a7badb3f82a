//! Immutable record of one completed run.

use crate::population::Individual;

/// History of one search run, detached from the engine that produced it.
///
/// `solutions`, `fitnesses` and `time_stamps` are index-aligned: entry `i`
/// is the `i`-th accepted improvement, its fitness, and the evaluation
/// count (or generation, for the evolutionary algorithm) at which it was
/// accepted. `time_stamps[0]` is always 0.
///
/// Results are meant for side-by-side comparison of runs; see
/// [`SearchEngine::snapshot`](super::SearchEngine::snapshot) and
/// [`SearchEngine::run`](super::SearchEngine::run).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<G> {
    /// Optional label for display.
    pub name: Option<String>,

    /// Every evaluated candidate, accepted or not, in order.
    pub steps: Vec<Individual<G>>,

    /// Accepted genomes in acceptance order.
    pub solutions: Vec<G>,

    /// Fitness of each accepted genome.
    pub fitnesses: Vec<f64>,

    /// Evaluation count (or generation) at each acceptance.
    pub time_stamps: Vec<usize>,

    /// Step-size history of an adaptive run; empty otherwise.
    pub step_sizes: Vec<f64>,

    /// Termination condition call count when the run ended.
    pub generations: usize,
}

impl<G> SearchResult<G> {
    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Fitness of the last accepted solution.
    pub fn best_fitness(&self) -> Option<f64> {
        self.fitnesses.last().copied()
    }

    /// The last accepted solution.
    pub fn final_solution(&self) -> Option<&G> {
        self.solutions.last()
    }

    /// Time stamp of the last improvement.
    pub fn evaluations(&self) -> usize {
        self.time_stamps.last().copied().unwrap_or(0)
    }

    /// Number of accepted improvements, excluding the starting point.
    pub fn improvements(&self) -> usize {
        self.solutions.len().saturating_sub(1)
    }

    /// Whether the run recorded nothing.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty() && self.steps.is_empty()
    }
}

impl<G> Default for SearchResult<G> {
    fn default() -> Self {
        Self {
            name: None,
            steps: Vec::new(),
            solutions: Vec::new(),
            fitnesses: Vec::new(),
            time_stamps: Vec::new(),
            step_sizes: Vec::new(),
            generations: 0,
        }
    }
}
