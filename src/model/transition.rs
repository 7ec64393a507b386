//! Transitions: edges from a set of source labels to one target label.

use crate::core::{all_pass, Guard, TransitionPhase};
use crate::model::hooks::TransitionHook;
use std::collections::HashMap;
use std::fmt;

/// An edge from any of the `from` labels to the `to` label.
///
/// Transitions are built with
/// [`TransitionBuilder`](crate::builder::TransitionBuilder). Guards declared on
/// the owning event are appended to the transition's own guards when the
/// machine is built.
pub struct Transition {
    pub(crate) from: Vec<String>,
    pub(crate) to: String,
    pub(crate) guards: Vec<Guard>,
    pub(crate) hooks: HashMap<TransitionPhase, TransitionHook>,
}

impl Transition {
    /// Source labels, in declaration order.
    pub fn from_states(&self) -> &[String] {
        &self.from
    }

    /// Target label.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Guards, including any inherited from the event.
    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    /// Whether `current` is one of the source labels.
    pub fn is_candidate(&self, current: &str) -> bool {
        self.from.iter().any(|label| label == current)
    }

    /// Whether every guard passes right now.
    pub fn guards_pass(&self) -> bool {
        all_pass(&self.guards)
    }

    /// Whether this transition may be selected from `current`.
    ///
    /// Guards are only evaluated for candidates.
    pub fn can_execute(&self, current: &str) -> bool {
        self.is_candidate(current) && self.guards_pass()
    }

    /// Whether a hook is bound to `phase`.
    pub fn has_hook(&self, phase: TransitionPhase) -> bool {
        self.hooks.contains_key(&phase)
    }

    pub(crate) fn hook(&self, phase: TransitionPhase) -> Option<&TransitionHook> {
        self.hooks.get(&phase)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guards", &self.guards.len())
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &[&str], to: &str, guards: Vec<Guard>) -> Transition {
        Transition {
            from: from.iter().map(|s| s.to_string()).collect(),
            to: to.to_string(),
            guards,
            hooks: HashMap::new(),
        }
    }

    #[test]
    fn candidate_matches_any_source_label() {
        let t = transition(&["start", "another_value"], "special_case", vec![]);

        assert!(t.is_candidate("start"));
        assert!(t.is_candidate("another_value"));
        assert!(!t.is_candidate("special_case"));
    }

    #[test]
    fn can_execute_requires_candidate_and_guards() {
        let open = transition(&["start"], "next", vec![Guard::always()]);
        let closed = transition(&["start"], "next", vec![Guard::always(), Guard::never()]);

        assert!(open.can_execute("start"));
        assert!(!open.can_execute("next"));
        assert!(!closed.can_execute("start"));
    }

    #[test]
    fn unguarded_transition_passes() {
        let t = transition(&["start"], "next", vec![]);
        assert!(t.guards_pass());
        assert!(!t.has_hook(TransitionPhase::After));
    }
}
