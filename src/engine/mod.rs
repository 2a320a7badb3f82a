//! Search engine.
//!
//! [`SearchEngine`] composes a fitness evaluator, a mutator, a termination
//! condition and, for the evolutionary algorithm, a selector and a replacer.
//! Every algorithm records its accepted improvements so runs with different
//! strategies can be compared afterwards.
//!
//! # Algorithms
//!
//! - [`SearchEngine::local`]: greedy (1+1) hill climbing
//! - [`SearchEngine::local_one_fifth`]: (1+1)-ES with the 1/5 success rule
//! - [`SearchEngine::simple_ea`]: generational evolutionary algorithm
//!
//! # Key Types
//!
//! - [`EngineConfig`]: seed and display name
//! - [`Algorithm`]: one algorithm invocation for [`SearchEngine::run`]
//! - [`SearchResult`]: detached history of a finished run
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

mod config;
mod result;
mod runner;

pub use config::EngineConfig;
pub use result::SearchResult;
pub use runner::{Algorithm, SearchEngine, STEP_GROWTH};
