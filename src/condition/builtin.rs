//! Built-in termination conditions.

use super::types::TerminationCondition;

/// Continues for a fixed number of calls.
///
/// `test` returns `true` exactly `max_iterations` times, then `false`
/// forever. The call counter saturates at `max_iterations`.
#[derive(Debug, Clone)]
pub struct LoopCondition {
    max_iterations: usize,
    calls: usize,
}

impl LoopCondition {
    /// Creates a condition allowing `max_iterations` iterations.
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            calls: 0,
        }
    }

    /// The configured iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl<G> TerminationCondition<G> for LoopCondition {
    fn test(&mut self, _candidate: &G) -> bool {
        if self.calls < self.max_iterations {
            self.calls += 1;
            true
        } else {
            false
        }
    }

    fn calls(&self) -> usize {
        self.calls
    }

    fn clear(&mut self) {
        self.calls = 0;
    }

    fn name(&self) -> &'static str {
        "loop"
    }
}

/// Stops once the candidate has not changed for `max_stall` consecutive calls.
///
/// Every call decrements a countdown. A candidate that differs from the
/// remembered one resets the countdown to `max_stall` before the decrement,
/// so `max_stall` identical calls yield `max_stall - 1` trues and then a
/// false.
#[derive(Debug, Clone)]
pub struct NoImprovementCondition<G> {
    max_stall: usize,
    remaining: usize,
    last_seen: Option<G>,
    calls: usize,
}

impl<G> NoImprovementCondition<G> {
    /// Creates a condition tolerating `max_stall` calls without change.
    pub fn new(max_stall: usize) -> Self {
        Self {
            max_stall,
            remaining: max_stall,
            last_seen: None,
            calls: 0,
        }
    }

    /// Calls left before the condition stops, assuming no change.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<G: Clone + PartialEq> TerminationCondition<G> for NoImprovementCondition<G> {
    fn test(&mut self, candidate: &G) -> bool {
        self.calls += 1;
        if self.last_seen.as_ref() != Some(candidate) {
            self.remaining = self.max_stall;
            self.last_seen = Some(candidate.clone());
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }

    fn calls(&self) -> usize {
        self.calls
    }

    fn clear(&mut self) {
        self.calls = 0;
        self.remaining = self.max_stall;
        self.last_seen = None;
    }

    fn name(&self) -> &'static str {
        "no-improvement"
    }
}

/// Continues until the candidate equals `target` exactly.
#[derive(Debug, Clone)]
pub struct ResultMatchCondition<G> {
    target: G,
    calls: usize,
}

impl<G> ResultMatchCondition<G> {
    /// Creates a condition that stops on `target`.
    pub fn new(target: G) -> Self {
        Self { target, calls: 0 }
    }

    /// The genome that ends the search.
    pub fn target(&self) -> &G {
        &self.target
    }
}

impl<G: PartialEq> TerminationCondition<G> for ResultMatchCondition<G> {
    fn test(&mut self, candidate: &G) -> bool {
        self.calls += 1;
        *candidate != self.target
    }

    fn calls(&self) -> usize {
        self.calls
    }

    fn clear(&mut self) {
        self.calls = 0;
    }

    fn name(&self) -> &'static str {
        "result-match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_loop_zero_stops_immediately() {
        let mut cond = LoopCondition::new(0);
        assert!(!TerminationCondition::<u8>::test(&mut cond, &0));
        assert_eq!(TerminationCondition::<u8>::calls(&cond), 0);
    }

    #[test]
    fn test_loop_clear_restarts() {
        let mut cond = LoopCondition::new(2);
        assert!(cond.test(&()));
        assert!(cond.test(&()));
        assert!(!cond.test(&()));
        TerminationCondition::<()>::clear(&mut cond);
        assert_eq!(TerminationCondition::<()>::calls(&cond), 0);
        assert!(cond.test(&()));
    }

    #[test]
    fn test_no_improvement_resets_on_change() {
        let mut cond = NoImprovementCondition::new(3);
        assert!(cond.test(&1));
        assert!(cond.test(&1));
        assert!(!cond.test(&1));
        // A new candidate restarts the countdown.
        assert!(cond.test(&2));
        assert_eq!(cond.remaining(), 2);
        assert_eq!(cond.calls(), 4);
    }

    #[test]
    fn test_no_improvement_single_stall() {
        let mut cond = NoImprovementCondition::new(1);
        assert!(!cond.test(&"a"));
        assert!(!cond.test(&"b"));
    }

    #[test]
    fn test_no_improvement_clear() {
        let mut cond = NoImprovementCondition::new(2);
        cond.test(&5);
        assert!(!cond.test(&5));
        cond.clear();
        assert_eq!(cond.calls(), 0);
        assert!(cond.test(&5));
    }

    #[test]
    fn test_only_loop_stays_exhausted() {
        let mut stall = NoImprovementCondition::new(1);
        assert!(!stall.test(&1));
        let mut stall = NoImprovementCondition::new(2);
        stall.test(&1);
        assert!(!stall.test(&1));
        assert!(stall.test(&2));

        let mut target = ResultMatchCondition::new(0);
        assert!(!target.test(&0));
        assert!(target.test(&1));

        let mut budget = LoopCondition::new(1);
        assert!(budget.test(&0));
        assert!(!budget.test(&0));
        assert!(!budget.test(&1));
    }

    #[test]
    fn test_result_match() {
        let mut cond = ResultMatchCondition::new(vec![0u8; 4]);
        assert!(cond.test(&vec![1, 0, 0, 0]));
        assert!(!cond.test(&vec![0, 0, 0, 0]));
        assert_eq!(cond.calls(), 2);
        cond.clear();
        assert_eq!(cond.calls(), 0);
    }

    proptest! {
        #[test]
        fn prop_loop_true_exactly_n_times(n in 0usize..200, extra in 0usize..50) {
            let mut cond = LoopCondition::new(n);
            let trues = (0..n + extra).filter(|_| cond.test(&())).count();
            prop_assert_eq!(trues, n);
            prop_assert_eq!(TerminationCondition::<()>::calls(&cond), n);
        }

        #[test]
        fn prop_no_improvement_stalls_after_k(k in 1usize..100) {
            let mut cond = NoImprovementCondition::new(k);
            for _ in 0..k - 1 {
                prop_assert!(cond.test(&7u32));
            }
            prop_assert!(!cond.test(&7u32));
            prop_assert_eq!(cond.test(&8u32), k > 1);
        }

        #[test]
        fn prop_result_match_only_stops_on_target(target in any::<i32>(), x in any::<i32>()) {
            let mut cond = ResultMatchCondition::new(target);
            prop_assert_eq!(cond.test(&x), x != target);
            prop_assert!(!cond.test(&target));
        }
    }
}
