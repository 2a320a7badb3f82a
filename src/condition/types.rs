//! Core trait for termination conditions.

/// Decides whether a search loop continues.
///
/// The engine calls [`test`](TerminationCondition::test) with the current
/// best genome before every iteration. Implementations keep a call counter
/// that is exposed through [`calls`](TerminationCondition::calls) and copied
/// into search results as the run length.
///
/// # Implementing
///
/// ```
/// use u_blackbox::condition::TerminationCondition;
///
/// struct Never {
///     calls: usize,
/// }
///
/// impl TerminationCondition<Vec<u8>> for Never {
///     fn test(&mut self, _candidate: &Vec<u8>) -> bool {
///         self.calls += 1;
///         false
///     }
///     fn calls(&self) -> usize {
///         self.calls
///     }
///     fn clear(&mut self) {
///         self.calls = 0;
///     }
/// }
/// ```
pub trait TerminationCondition<G> {
    /// Returns `true` while the search should continue.
    fn test(&mut self, candidate: &G) -> bool;

    /// Number of counted `test` calls since construction or the last clear.
    fn calls(&self) -> usize;

    /// Resets the counter and any variant state back to the running state.
    fn clear(&mut self);

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
