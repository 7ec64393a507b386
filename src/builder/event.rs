//! Builder for constructing events.

use crate::builder::TransitionBuilder;
use crate::core::{EventPhase, Guard, UnknownPhase};
use crate::dispatch::Dispatch;
use crate::model::{EventHook, HookResult};

/// Builder for events with a fluent API.
pub struct EventBuilder {
    pub(crate) name: String,
    pub(crate) transitions: Vec<TransitionBuilder>,
    pub(crate) guards: Vec<Guard>,
    pub(crate) hooks: Vec<(Result<EventPhase, UnknownPhase>, EventHook)>,
}

impl EventBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
            guards: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Add a candidate transition. Candidates are tried in the order added.
    pub fn transition(mut self, transition: TransitionBuilder) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn transitions(mut self, transitions: impl IntoIterator<Item = TransitionBuilder>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Add a guard shared by every transition of this event.
    ///
    /// It is appended after each transition's own guards.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Bind a hook to a phase. A later binding for the same phase wins.
    pub fn on<F>(mut self, phase: EventPhase, hook: F) -> Self
    where
        F: Fn(&Dispatch<'_>) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.push((Ok(phase), Box::new(hook)));
        self
    }

    /// Bind a hook by its string key (`"before"`, `"after"` or `"ensure"`).
    pub fn on_named<F>(mut self, key: &str, hook: F) -> Self
    where
        F: Fn(&Dispatch<'_>) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.push((key.parse(), Box::new(hook)));
        self
    }
}
