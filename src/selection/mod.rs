//! Parent selection.
//!
//! [`Selection`] enumerates the strategies; [`Selector`] applies one of
//! them `selection_count` times to an evaluated population.

mod config;
mod selector;
mod strategy;

pub use config::SelectorConfig;
pub use selector::Selector;
pub use strategy::Selection;
