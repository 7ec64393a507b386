//! Builder for constructing transitions.

use crate::core::{Guard, TransitionPhase, UnknownPhase};
use crate::dispatch::Dispatch;
use crate::model::{HookResult, Transition, TransitionHook};

/// Builder for transitions with a fluent API.
///
/// Missing source or target states and unknown hook keys are reported when
/// the machine is built.
#[derive(Default)]
pub struct TransitionBuilder {
    pub(crate) from: Vec<String>,
    pub(crate) to: Option<String>,
    pub(crate) guards: Vec<Guard>,
    pub(crate) hooks: Vec<(Result<TransitionPhase, UnknownPhase>, TransitionHook)>,
}

impl TransitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unguarded transition from one label to another.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new().from(from).to(to)
    }

    /// Add a source label (at least one is required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source labels.
    pub fn from_any<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the target label (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn guards(mut self, guards: impl IntoIterator<Item = Guard>) -> Self {
        self.guards.extend(guards);
        self
    }

    /// Add a guard using a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Bind a hook to a phase. A later binding for the same phase wins.
    pub fn on<F>(mut self, phase: TransitionPhase, hook: F) -> Self
    where
        F: Fn(&Dispatch<'_>, &Transition) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.push((Ok(phase), Box::new(hook)));
        self
    }

    /// Bind a hook by its string key (`"after"` or `"success"`).
    pub fn on_named<F>(mut self, key: &str, hook: F) -> Self
    where
        F: Fn(&Dispatch<'_>, &Transition) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.push((key.parse(), Box::new(hook)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_sets_both_ends() {
        let builder = TransitionBuilder::between("start", "end");
        assert_eq!(builder.from, vec!["start".to_string()]);
        assert_eq!(builder.to.as_deref(), Some("end"));
    }

    #[test]
    fn from_any_keeps_declaration_order() {
        let builder = TransitionBuilder::new()
            .from("start")
            .from_any(["another_value", "retry"]);
        assert_eq!(builder.from, vec!["start", "another_value", "retry"]);
    }

    #[test]
    fn on_named_defers_unknown_keys() {
        let builder = TransitionBuilder::between("a", "b")
            .on_named("success", |_ctx, _t| Ok(()))
            .on_named("not_a_transition_callback", |_ctx, _t| Ok(()));

        assert_eq!(builder.hooks[0].0, Ok(TransitionPhase::Success));
        assert!(builder.hooks[1].0.is_err());
    }
}
