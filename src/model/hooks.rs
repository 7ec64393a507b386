//! Host-supplied collaborators: hooks and the persister.

use crate::dispatch::Dispatch;
use crate::model::Transition;

/// Error type returned by hooks and persisters.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by hooks and persisters.
pub type HookResult = Result<(), HookError>;

/// A global or event-scoped hook. Receives the dispatch in progress, which
/// exposes the machine and the event.
pub type EventHook = Box<dyn Fn(&Dispatch<'_>) -> HookResult + Send + Sync>;

/// A transition-scoped hook. Also receives the selected transition.
pub type TransitionHook = Box<dyn Fn(&Dispatch<'_>, &Transition) -> HookResult + Send + Sync>;

/// Records a newly committed state label somewhere durable.
///
/// Called synchronously once per committed transition, after the commit.
/// Closures of the form `Fn(&str) -> HookResult` implement this trait.
pub trait Persister: Send + Sync {
    fn persist(&self, state: &str) -> HookResult;
}

impl<F> Persister for F
where
    F: Fn(&str) -> HookResult + Send + Sync,
{
    fn persist(&self, state: &str) -> HookResult {
        self(state)
    }
}
