//! Guard predicates for controlling transition selection.
//!
//! Guards are zero-argument boolean functions. The engine calls them while
//! scanning an event's transitions and never interprets their result beyond
//! "may this transition be selected right now".

use std::fmt;
use std::sync::Arc;

/// Predicate that gates whether a transition may be selected.
///
/// Guards are expected to be fast and free of side effects. They are cheap to
/// clone, so an event-level guard can be shared by every transition of that
/// event.
///
/// # Example
///
/// ```rust
/// use statehook::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let door_open = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&door_open);
/// let guard = Guard::new(move || !flag.load(Ordering::SeqCst));
///
/// assert!(guard.check());
/// door_open.store(true, Ordering::SeqCst);
/// assert!(!guard.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// A guard that always passes.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// A guard that never passes.
    pub fn never() -> Self {
        Guard::new(|| false)
    }

    /// Evaluate the predicate now.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

/// Evaluate guards in order, stopping at the first one that fails.
///
/// An empty list passes.
pub fn all_pass(guards: &[Guard]) -> bool {
    guards.iter().all(Guard::check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn guard_reports_predicate_result() {
        assert!(Guard::always().check());
        assert!(!Guard::never().check());
    }

    #[test]
    fn guard_observes_captured_state() {
        let limit = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&limit);
        let guard = Guard::new(move || seen.load(Ordering::SeqCst) < 2);

        assert!(guard.check());
        limit.store(2, Ordering::SeqCst);
        assert!(!guard.check());
    }

    #[test]
    fn empty_guard_list_passes() {
        assert!(all_pass(&[]));
    }

    #[test]
    fn all_pass_short_circuits_on_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = Guard::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(!all_pass(&[Guard::never(), counted.clone()]));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(all_pass(&[Guard::always(), counted]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cloned_guards_share_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = Guard::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let copy = guard.clone();

        guard.check();
        copy.check();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
