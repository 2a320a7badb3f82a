//! Fitness evaluation with call-count bookkeeping.

use super::types::{GenomeMapping, Mapped, Objective, ObjectiveParams};
use crate::error::Result;

/// Wraps a raw objective with an optional genome mapping, objective
/// parameters, and a call counter.
///
/// The call counter is the engine's notion of time: improvement time stamps
/// are taken from it. It only ever grows until [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use u_blackbox::fitness::FitnessEvaluator;
/// use u_blackbox::fitness::functions::OneMax;
///
/// let mut evaluator: FitnessEvaluator<Vec<u8>> = FitnessEvaluator::new(OneMax);
/// assert_eq!(evaluator.evaluate(&vec![1, 1, 0]).unwrap(), 2.0);
/// assert_eq!(evaluator.calls_made(), 1);
/// assert_eq!(evaluator.last_fitness(), Some(2.0));
/// ```
pub struct FitnessEvaluator<G> {
    objective: Box<dyn Objective<G>>,
    params: ObjectiveParams,
    calls_made: usize,
    last_fitness: Option<f64>,
}

impl<G> FitnessEvaluator<G> {
    /// Creates an evaluator that passes genomes to `objective` unchanged.
    pub fn new(objective: impl Objective<G> + 'static) -> Self {
        Self {
            objective: Box::new(objective),
            params: ObjectiveParams::default(),
            calls_made: 0,
            last_fitness: None,
        }
    }

    /// Creates an evaluator that maps each genome before scoring it.
    pub fn with_mapping<P: 'static>(
        objective: impl Objective<P> + 'static,
        mapping: impl GenomeMapping<G, P> + 'static,
    ) -> Self
    where
        G: 'static,
    {
        Self::new(Mapped::new(objective, mapping))
    }

    /// Sets the bias forwarded to the objective.
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.params.bias = Some(bias);
        self
    }

    /// Sets the coefficients forwarded to the objective.
    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.params.coefficients = Some(coefficients);
        self
    }

    /// Replaces the bias.
    pub fn set_bias(&mut self, bias: Option<f64>) {
        self.params.bias = bias;
    }

    /// Replaces the coefficients.
    pub fn set_coefficients(&mut self, coefficients: Option<Vec<f64>>) {
        self.params.coefficients = coefficients;
    }

    /// Evaluates one genome.
    ///
    /// Counts the call even when the objective fails; objective errors are
    /// returned unchanged and leave `last_fitness` untouched.
    pub fn evaluate(&mut self, genome: &G) -> Result<f64> {
        self.calls_made += 1;
        let fitness = self.objective.evaluate(genome, &self.params)?;
        self.last_fitness = Some(fitness);
        Ok(fitness)
    }

    /// Resets the counter and last fitness. The objective, mapping and
    /// parameters stay as configured.
    pub fn clear(&mut self) {
        self.calls_made = 0;
        self.last_fitness = None;
    }

    /// Number of evaluations since construction or the last clear.
    pub fn calls_made(&self) -> usize {
        self.calls_made
    }

    /// Result of the most recent successful evaluation.
    pub fn last_fitness(&self) -> Option<f64> {
        self.last_fitness
    }

    /// Parameters forwarded to the objective.
    pub fn params(&self) -> &ObjectiveParams {
        &self.params
    }

    /// Name of the wrapped objective.
    pub fn name(&self) -> &'static str {
        self.objective.name()
    }
}

impl<G> std::fmt::Debug for FitnessEvaluator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitnessEvaluator")
            .field("objective", &self.objective.name())
            .field("params", &self.params)
            .field("calls_made", &self.calls_made)
            .field("last_fitness", &self.last_fitness)
            .finish()
    }
}
