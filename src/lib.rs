//! Black-box optimization engine for comparing search strategies.
//!
//! Composes interchangeable strategies into three single-objective search
//! algorithms and records the history of every run:
//!
//! - **Local search**: greedy (1+1) hill climbing with a pluggable
//!   perturbation.
//! - **1/5-rule search**: (1+1) evolution strategy whose mutation step size
//!   adapts to the observed success rate.
//! - **Simple EA**: generational evolutionary algorithm with pluggable
//!   selection, replacement with elitism, crossover and mutation.
//!
//! Fitness is always minimized. Wrap maximization objectives in
//! [`fitness::Maximize`].
//!
//! # Modules
//!
//! - [`fitness`]: objectives, genome mappings, the counting evaluator and
//!   benchmark functions
//! - [`mutation`]: perturbation operators and the mutator
//! - [`condition`]: termination conditions
//! - [`selection`]: parent selection
//! - [`replacement`]: crossover and generational replacement
//! - [`population`]: evaluated individuals and genome initialization
//! - [`engine`]: the search engine and run results
//!
//! # Example
//!
//! ```
//! use u_blackbox::condition::LoopCondition;
//! use u_blackbox::engine::{Algorithm, EngineConfig, SearchEngine};
//! use u_blackbox::fitness::{functions::Sphere, FitnessEvaluator};
//! use u_blackbox::mutation::{Gaussian, Mutator};
//!
//! let mut engine = SearchEngine::new(
//!     FitnessEvaluator::new(Sphere).with_coefficients(vec![0.0; 4]),
//!     Mutator::new(Gaussian),
//!     LoopCondition::new(200),
//! )
//! .with_config(EngineConfig::default().with_seed(7));
//!
//! let result = engine
//!     .run(Algorithm::LocalOneFifth {
//!         initial: vec![1.0; 4],
//!         initial_step_size: 0.5,
//!     })
//!     .unwrap();
//! assert!(result.best_fitness().unwrap() <= 4.0);
//! assert_eq!(result.step_sizes.len(), 201);
//! ```

pub mod condition;
pub mod engine;
mod error;
pub mod fitness;
pub mod mutation;
pub mod population;
pub mod replacement;
pub mod selection;

pub use error::{Result, SearchError};
