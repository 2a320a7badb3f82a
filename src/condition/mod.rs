//! Termination conditions.
//!
//! A termination condition is a stateful predicate consulted once per
//! iteration of every search loop. It answers "keep going?" for the current
//! best genome and counts how many times it was asked.
//!
//! # Variants
//!
//! - [`LoopCondition`]: fixed iteration budget
//! - [`NoImprovementCondition`]: stops after the candidate stalls for `k` calls
//! - [`ResultMatchCondition`]: stops once the candidate equals a known target
//!
//! [`LoopCondition`] stays `false` once exhausted until
//! [`TerminationCondition::clear`]. The other two answer for the candidate
//! they are shown: a [`NoImprovementCondition`] that saw a different genome
//! restarts its countdown, and a [`ResultMatchCondition`] returns `true`
//! again for any non-target genome. The engines stop at the first `false`.

mod builtin;
mod types;

pub use builtin::{LoopCondition, NoImprovementCondition, ResultMatchCondition};
pub use types::TerminationCondition;
