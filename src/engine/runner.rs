//! Search loop execution.
//!
//! [`SearchEngine`] owns every strategy of one configuration plus the
//! history of the current run, and drives one of three algorithms:
//!
//! - [`local`](SearchEngine::local): greedy (1+1) hill climbing
//! - [`local_one_fifth`](SearchEngine::local_one_fifth): (1+1)-ES with
//!   Rechenberg's 1/5 success rule
//! - [`simple_ea`](SearchEngine::simple_ea): generational EA
//!   (select → replace → mutate → evaluate)

use super::config::EngineConfig;
use super::result::SearchResult;
use crate::condition::TerminationCondition;
use crate::error::{Result, SearchError};
use crate::fitness::FitnessEvaluator;
use crate::mutation::{Mutator, ParameterKind};
use crate::population::{best_of, sort_by_fitness, Individual};
use crate::replacement::Replacer;
use crate::selection::Selector;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Step-size factor applied after a successful mutation.
///
/// A failure applies `STEP_GROWTH^(-1/4)`, so the size is stationary at a
/// success rate of one in five.
pub const STEP_GROWTH: f64 = 1.5;

/// One algorithm invocation, used by [`SearchEngine::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm<G> {
    /// Greedy hill climbing from `initial`.
    Local {
        /// Starting genome.
        initial: G,
    },

    /// Adaptive step-size search from `initial`.
    LocalOneFifth {
        /// Starting genome.
        initial: G,
        /// Starting deviation.
        initial_step_size: f64,
    },

    /// Generational evolutionary algorithm.
    SimpleEa {
        /// Unevaluated starting population.
        initial_population: Vec<G>,
    },
}

impl<G> Algorithm<G> {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Local { .. } => "local",
            Algorithm::LocalOneFifth { .. } => "local-one-fifth",
            Algorithm::SimpleEa { .. } => "simple-ea",
        }
    }
}

/// Composes evaluator, mutator, termination condition and (optionally)
/// selector and replacer into runnable search algorithms.
///
/// # Run history
///
/// Every algorithm records, index-aligned:
///
/// - `solutions`: accepted genomes, starting with the initial best
/// - `fitnesses`: their fitness values
/// - `time_stamps`: evaluation count at acceptance (generation count for
///   [`simple_ea`](Self::simple_ea)), starting with 0
///
/// plus `steps`, every evaluated candidate whether accepted or not.
///
/// History accumulates until [`clear`](Self::clear) or
/// [`snapshot`](Self::snapshot); [`run`](Self::run) does both around a
/// single algorithm call.
///
/// # Usage
///
/// ```
/// use u_blackbox::condition::ResultMatchCondition;
/// use u_blackbox::engine::{Algorithm, EngineConfig, SearchEngine};
/// use u_blackbox::fitness::{functions::OneMax, FitnessEvaluator};
/// use u_blackbox::mutation::{BitflipSingle, Mutator};
///
/// let mut engine = SearchEngine::new(
///     FitnessEvaluator::new(OneMax),
///     Mutator::new(BitflipSingle),
///     ResultMatchCondition::new(vec![0u8; 8]),
/// )
/// .with_config(EngineConfig::default().with_seed(42));
///
/// let result = engine.run(Algorithm::Local { initial: vec![1; 8] }).unwrap();
/// assert_eq!(result.final_solution(), Some(&vec![0u8; 8]));
/// ```
///
/// # Reentrancy
///
/// Not reentrant: every iteration mutates the history, the evaluator
/// counter and the condition state.
pub struct SearchEngine<G> {
    config: EngineConfig,
    evaluator: FitnessEvaluator<G>,
    mutator: Mutator<G>,
    condition: Box<dyn TerminationCondition<G>>,
    selector: Option<Selector>,
    replacer: Option<Replacer<G>>,
    rng: StdRng,

    steps: Vec<Individual<G>>,
    solutions: Vec<G>,
    fitnesses: Vec<f64>,
    time_stamps: Vec<usize>,
    step_sizes: Vec<f64>,

    last_parents: Vec<Individual<G>>,
    last_children: Vec<G>,
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

impl<G: Clone> SearchEngine<G> {
    /// Creates an idle engine with the default configuration.
    pub fn new(
        evaluator: FitnessEvaluator<G>,
        mutator: Mutator<G>,
        condition: impl TerminationCondition<G> + 'static,
    ) -> Self {
        let config = EngineConfig::default();
        Self {
            rng: create_rng(config.seed),
            config,
            evaluator,
            mutator,
            condition: Box::new(condition),
            selector: None,
            replacer: None,
            steps: Vec::new(),
            solutions: Vec::new(),
            fitnesses: Vec::new(),
            time_stamps: Vec::new(),
            step_sizes: Vec::new(),
            last_parents: Vec::new(),
            last_children: Vec::new(),
        }
    }

    /// Replaces the configuration and reseeds the random source.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.rng = create_rng(config.seed);
        self.config = config;
        self
    }

    /// Sets the parent selector required by [`simple_ea`](Self::simple_ea).
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Sets the replacer required by [`simple_ea`](Self::simple_ea).
    pub fn with_replacer(mut self, replacer: Replacer<G>) -> Self {
        self.replacer = Some(replacer);
        self
    }

    /// Restarts the random source from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ---- Algorithms ----

    /// Greedy (1+1) hill climbing.
    ///
    /// Evaluates `initial`, then repeatedly mutates the current genome and
    /// keeps the child only if its fitness is strictly lower. Stops when the
    /// termination condition rejects the current genome and returns it.
    pub fn local(&mut self, initial: G) -> Result<G> {
        self.validate_strategies()?;
        info!(
            "starting local search: objective={}, mutation={}, condition={}",
            self.evaluator.name(),
            self.mutator.name(),
            self.condition.name()
        );
        let best = self.climb(initial, None)?;
        self.log_finished("local search");
        Ok(best)
    }

    /// (1+1)-ES with the 1/5 success rule.
    ///
    /// Like [`local`](Self::local), but the mutator is driven with an
    /// explicit step size `sigma` that is multiplied by [`STEP_GROWTH`]
    /// after each acceptance and by `STEP_GROWTH^(-1/4)` after each
    /// rejection. Returns the final genome and the step-size history
    /// (initial value plus one entry per iteration).
    ///
    /// The mutator's perturbation must be deviation-driven, e.g.
    /// [`Gaussian`](crate::mutation::Gaussian).
    pub fn local_one_fifth(&mut self, initial: G, initial_step_size: f64) -> Result<(G, Vec<f64>)> {
        self.validate_strategies()?;
        if !initial_step_size.is_finite() || initial_step_size <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "initial step size must be positive and finite, got {initial_step_size}"
            )));
        }
        if self.mutator.parameter_kind() != ParameterKind::Deviation {
            return Err(SearchError::InvalidConfig(format!(
                "adaptive step size needs a deviation-driven perturbation, got {}",
                self.mutator.name()
            )));
        }

        info!(
            "starting 1/5-rule search: objective={}, mutation={}, condition={}, sigma={initial_step_size}",
            self.evaluator.name(),
            self.mutator.name(),
            self.condition.name()
        );
        let best = self.climb(initial, Some(initial_step_size))?;
        self.log_finished("1/5-rule search");
        Ok((best, self.step_sizes.clone()))
    }

    /// Generational evolutionary algorithm.
    ///
    /// Each generation selects parents, sorts them best-first, replaces
    /// them with crossover children (elites first), mutates every child and
    /// evaluates the result. The running best is the true fitness minimum
    /// seen so far; improvements are time-stamped with
    /// `evaluations / initial_population.len()`.
    ///
    /// A missing selector or replacer is reported when the first
    /// generation is built.
    pub fn simple_ea(&mut self, initial_population: Vec<G>) -> Result<Individual<G>> {
        if initial_population.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }
        self.validate_strategies()?;
        let population_size = initial_population.len();
        info!(
            "starting EA search: population={population_size}, objective={}, selection={}, replacement={}, mutation={}, condition={}",
            self.evaluator.name(),
            self.selector.as_ref().map_or("none".to_string(), |s| s.name()),
            self.replacer.as_ref().map_or("none".to_string(), |r| r.name()),
            self.mutator.name(),
            self.condition.name()
        );

        let mut population = self.evaluate_all(initial_population)?;
        let mut best = best_of(&population)?.clone();
        self.steps.push(best.clone());
        self.accept(best.genome.clone(), best.fitness, 0);

        while self.condition.test(&best.genome) {
            population = self.next_generation(&population)?;
            let generation_best = best_of(&population)?;
            self.steps.push(generation_best.clone());

            if generation_best.fitness < best.fitness {
                best = generation_best.clone();
                let generation = self.evaluator.calls_made() / population_size;
                debug!("generation {generation}: new best fitness {}", best.fitness);
                self.accept(best.genome.clone(), best.fitness, generation);
            }
        }

        self.log_finished("EA search");
        Ok(best)
    }

    /// Clears history, resets the evaluator counter and the termination
    /// condition, and runs `algorithm` to completion, returning its history.
    ///
    /// The engine holds no history afterwards, even when the run fails.
    pub fn run(&mut self, algorithm: Algorithm<G>) -> Result<SearchResult<G>> {
        self.clear();
        self.config.validate()?;
        debug!("run: {}", algorithm.name());

        let outcome = match algorithm {
            Algorithm::Local { initial } => self.local(initial).map(drop),
            Algorithm::LocalOneFifth {
                initial,
                initial_step_size,
            } => self.local_one_fifth(initial, initial_step_size).map(drop),
            Algorithm::SimpleEa { initial_population } => {
                self.simple_ea(initial_population).map(drop)
            }
        };

        match outcome {
            Ok(()) => Ok(self.snapshot()),
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }
}

impl<G> SearchEngine<G> {
    // ---- History management ----

    /// Empties the history and resets evaluator and condition counters.
    /// Strategy configuration is untouched.
    pub fn clear(&mut self) {
        self.evaluator.clear();
        self.condition.clear();
        self.steps.clear();
        self.solutions.clear();
        self.fitnesses.clear();
        self.time_stamps.clear();
        self.step_sizes.clear();
        self.last_parents.clear();
        self.last_children.clear();
    }

    /// Moves the current history into a [`SearchResult`] and clears the
    /// engine.
    pub fn snapshot(&mut self) -> SearchResult<G> {
        let result = SearchResult {
            name: self.config.name.clone(),
            steps: std::mem::take(&mut self.steps),
            solutions: std::mem::take(&mut self.solutions),
            fitnesses: std::mem::take(&mut self.fitnesses),
            time_stamps: std::mem::take(&mut self.time_stamps),
            step_sizes: std::mem::take(&mut self.step_sizes),
            generations: self.condition.calls(),
        };
        self.clear();
        result
    }

    // ---- Accessors ----

    /// Every evaluated candidate of the current run.
    pub fn steps(&self) -> &[Individual<G>] {
        &self.steps
    }

    /// Accepted genomes of the current run.
    pub fn solutions(&self) -> &[G] {
        &self.solutions
    }

    /// Fitness of each accepted genome.
    pub fn fitnesses(&self) -> &[f64] {
        &self.fitnesses
    }

    /// Time stamp of each accepted genome.
    pub fn time_stamps(&self) -> &[usize] {
        &self.time_stamps
    }

    /// Step-size history of the current adaptive run.
    pub fn step_sizes(&self) -> &[f64] {
        &self.step_sizes
    }

    /// Parents of the latest EA generation, sorted best-first.
    pub fn last_parents(&self) -> &[Individual<G>] {
        &self.last_parents
    }

    /// Children of the latest EA generation as the replacer produced them,
    /// before mutation.
    pub fn last_children(&self) -> &[G] {
        &self.last_children
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The fitness evaluator.
    pub fn evaluator(&self) -> &FitnessEvaluator<G> {
        &self.evaluator
    }

    /// Mutable evaluator, e.g. to change coefficients between runs.
    pub fn evaluator_mut(&mut self) -> &mut FitnessEvaluator<G> {
        &mut self.evaluator
    }

    /// The termination condition.
    pub fn condition(&self) -> &dyn TerminationCondition<G> {
        self.condition.as_ref()
    }

    /// The mutator.
    pub fn mutator(&self) -> &Mutator<G> {
        &self.mutator
    }

    /// Mutable mutator, e.g. to raise the mutation probability between runs.
    pub fn mutator_mut(&mut self) -> &mut Mutator<G> {
        &mut self.mutator
    }

    /// Mutable selector, if configured.
    pub fn selector_mut(&mut self) -> Option<&mut Selector> {
        self.selector.as_mut()
    }

    /// Mutable replacer, if configured.
    pub fn replacer_mut(&mut self) -> Option<&mut Replacer<G>> {
        self.replacer.as_mut()
    }
}

impl<G: Clone> SearchEngine<G> {
    // ---- Internals ----

    /// Validates every configured strategy before a run touches the history.
    fn validate_strategies(&self) -> Result<()> {
        self.mutator.config().validate()?;
        if let Some(selector) = &self.selector {
            selector.config().validate()?;
        }
        if let Some(replacer) = &self.replacer {
            replacer.config().validate()?;
        }
        Ok(())
    }

    /// Shared (1+1) loop. With `step_size`, drives the mutator with an
    /// adaptive deviation and records it.
    fn climb(&mut self, initial: G, mut step_size: Option<f64>) -> Result<G> {
        let mut current_fitness = self.evaluator.evaluate(&initial)?;
        self.steps.push(Individual::new(initial.clone(), current_fitness));
        self.accept(initial.clone(), current_fitness, 0);
        if let Some(sigma) = step_size {
            self.step_sizes.push(sigma);
        }
        let mut current = initial;

        while self.condition.test(&current) {
            let child = match step_size {
                Some(sigma) => self.mutator.mutate_with(&current, sigma, &mut self.rng)?,
                None => self.mutator.mutate_single(&current, &mut self.rng)?,
            };
            let child_fitness = self.evaluator.evaluate(&child)?;
            self.steps.push(Individual::new(child.clone(), child_fitness));

            let improved = child_fitness < current_fitness;
            if improved {
                let stamp = self.evaluator.calls_made();
                debug!("evaluation {stamp}: accepted fitness {child_fitness}");
                self.accept(child.clone(), child_fitness, stamp);
                current = child;
                current_fitness = child_fitness;
            } else {
                trace!("rejected fitness {child_fitness} (current {current_fitness})");
            }

            if let Some(sigma) = step_size.as_mut() {
                *sigma *= if improved {
                    STEP_GROWTH
                } else {
                    STEP_GROWTH.powf(-0.25)
                };
                self.step_sizes.push(*sigma);
            }
        }

        Ok(current)
    }

    /// One generation: select, sort best-first, replace, mutate, evaluate.
    fn next_generation(&mut self, population: &[Individual<G>]) -> Result<Vec<Individual<G>>> {
        let selector = self
            .selector
            .as_ref()
            .ok_or(SearchError::MissingStrategy("selector"))?;
        let replacer = self
            .replacer
            .as_ref()
            .ok_or(SearchError::MissingStrategy("replacer"))?;

        self.last_parents = selector.select(population, &mut self.rng)?;
        sort_by_fitness(&mut self.last_parents);
        self.last_children = replacer.replace(&self.last_parents, &mut self.rng)?;
        let children = self
            .mutator
            .mutate_population(&self.last_children, &mut self.rng)?;
        self.evaluate_all(children)
    }

    fn evaluate_all(&mut self, genomes: Vec<G>) -> Result<Vec<Individual<G>>> {
        genomes
            .into_iter()
            .map(|genome| {
                let fitness = self.evaluator.evaluate(&genome)?;
                Ok(Individual::new(genome, fitness))
            })
            .collect()
    }

    fn accept(&mut self, genome: G, fitness: f64, stamp: usize) {
        self.solutions.push(genome);
        self.fitnesses.push(fitness);
        self.time_stamps.push(stamp);
    }

    fn log_finished(&self, what: &str) {
        info!(
            "{what} finished: condition calls={}, evaluations={}, improvements={}, best fitness={:?}",
            self.condition.calls(),
            self.evaluator.calls_made(),
            self.solutions.len().saturating_sub(1),
            self.fitnesses.last()
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
