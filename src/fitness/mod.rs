//! Fitness evaluation.
//!
//! Users plug in an [`Objective`] (any `Fn(&G, &ObjectiveParams) -> Result<f64>`
//! works) and optionally a [`GenomeMapping`]. The [`FitnessEvaluator`] owns
//! both, forwards bias/coefficients, and counts evaluations.
//!
//! # Key Types
//!
//! - [`Objective`]: raw objective, lower is better
//! - [`GenomeMapping`]: representation transform applied before scoring
//! - [`Maximize`]: sign-inverting adapter for maximize-oriented objectives
//! - [`FitnessEvaluator`]: call-counting wrapper used by the engine
//!
//! # Submodules
//!
//! - [`functions`]: benchmark objectives (OneMax, LABS, Sphere, Rosenbrock, ...)

mod evaluator;
pub mod functions;
mod mapping;
mod types;

pub use evaluator::FitnessEvaluator;
pub use mapping::BinaryToInterval;
pub use types::{GenomeMapping, Mapped, Maximize, Objective, ObjectiveParams};
