//! The immutable description of a machine: events, transitions, guards and
//! hook bindings, plus the state set derived from them.

mod event;
mod hooks;
mod transition;

pub use event::Event;
pub use hooks::{EventHook, HookError, HookResult, Persister, TransitionHook};
pub use transition::Transition;

use crate::core::GlobalPhase;
use std::collections::{BTreeSet, HashMap};

/// Validated, frozen machine definition.
pub struct Definition {
    pub(crate) initial_state: String,
    pub(crate) events: HashMap<String, Event>,
    pub(crate) states: BTreeSet<String>,
    pub(crate) global_hooks: HashMap<GlobalPhase, EventHook>,
}

impl Definition {
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// Every label that appears as a source or target of any transition.
    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.events.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn has_global_hook(&self, phase: GlobalPhase) -> bool {
        self.global_hooks.contains_key(&phase)
    }

    pub(crate) fn global_hook(&self, phase: GlobalPhase) -> Option<&EventHook> {
        self.global_hooks.get(&phase)
    }
}

/// Collect every label named by any transition's `from` or `to`.
pub(crate) fn derive_states<'a>(events: impl IntoIterator<Item = &'a Event>) -> BTreeSet<String> {
    let mut states = BTreeSet::new();
    for event in events {
        for transition in &event.transitions {
            states.extend(transition.from.iter().cloned());
            states.insert(transition.to.clone());
        }
    }
    states
}
