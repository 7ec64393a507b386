//! Events: named bundles of candidate transitions and hooks.

use crate::core::{EventPhase, Guard};
use crate::model::hooks::EventHook;
use crate::model::Transition;
use std::collections::HashMap;
use std::fmt;

/// A named, host-triggerable operation.
///
/// Built with [`EventBuilder`](crate::builder::EventBuilder).
pub struct Event {
    pub(crate) name: String,
    pub(crate) transitions: Vec<Transition>,
    pub(crate) guards: Vec<Guard>,
    pub(crate) hooks: HashMap<EventPhase, EventHook>,
}

impl Event {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Event-level guards. These are already appended to every transition.
    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    pub fn has_hook(&self, phase: EventPhase) -> bool {
        self.hooks.contains_key(&phase)
    }

    /// First transition, in declaration order, that may be taken from
    /// `current`.
    pub fn select(&self, current: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.can_execute(current))
    }

    pub(crate) fn hook(&self, phase: EventPhase) -> Option<&EventHook> {
        self.hooks.get(&phase)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .field("guards", &self.guards.len())
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, to: &str, guards: Vec<Guard>) -> Transition {
        Transition {
            from: vec![from.to_string()],
            to: to.to_string(),
            guards,
            hooks: HashMap::new(),
        }
    }

    fn event(transitions: Vec<Transition>) -> Event {
        Event {
            name: "first_event".to_string(),
            transitions,
            guards: Vec::new(),
            hooks: HashMap::new(),
        }
    }

    #[test]
    fn select_skips_failing_guards() {
        let e = event(vec![
            transition("start", "special_case", vec![Guard::never(), Guard::always()]),
            transition("start", "succeeded_first", vec![Guard::always()]),
        ]);

        assert_eq!(e.select("start").map(Transition::to), Some("succeeded_first"));
    }

    #[test]
    fn select_takes_first_match_in_declaration_order() {
        let e = event(vec![
            transition("start", "first", vec![]),
            transition("start", "second", vec![]),
        ]);

        assert_eq!(e.select("start").map(Transition::to), Some("first"));
    }

    #[test]
    fn select_ignores_non_candidates() {
        let e = event(vec![transition("elsewhere", "first", vec![])]);
        assert!(e.select("start").is_none());
    }
}
