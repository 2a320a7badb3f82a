//! Mutation.
//!
//! A [`Perturbation`] is a pure `(genome, parameter) -> genome'` function;
//! the [`Mutator`] owns one and supplies its parameter from
//! [`MutatorConfig`].
//!
//! # Built-in perturbations
//!
//! - [`BitflipSingle`], [`BitflipMultiple`] for binary genomes (`Vec<u8>`)
//! - [`Gaussian`] for real vectors (`Vec<f64>`)
//! - [`SwapPositions`] for permutations and other ordered genomes
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Bäck (1996), *Evolutionary Algorithms in Theory and Practice*

mod config;
mod mutator;
mod operators;
mod types;

pub use config::MutatorConfig;
pub use mutator::Mutator;
pub use operators::{BitflipMultiple, BitflipSingle, Gaussian, SwapPositions};
pub use types::{ParameterKind, Perturbation};
