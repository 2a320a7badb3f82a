//! Generational replacement and crossover.
//!
//! A [`Replacer`] turns the selected parents into the next raw generation
//! using one [`ReplacementStrategy`] and one [`Crossover`] operator.
//!
//! # Built-ins
//!
//! - [`Elite`]: keep the leading parents, fill the rest with crossover children
//! - [`SinglePoint`], [`OrderedSegment`], [`OrderCrossover`]: crossover operators

mod crossover;
mod replacer;
mod strategy;
mod types;

pub use crossover::{OrderCrossover, OrderedSegment, SinglePoint};
pub use replacer::{Replacer, ReplacerConfig};
pub use strategy::Elite;
pub use types::{Crossover, ReplacementStrategy};
