//! Hook phases for the three callback scopes.
//!
//! Each scope has a closed set of phases. Typed registration cannot name an
//! invalid phase; string keys are parsed with `FromStr` and a failure is
//! reported when the machine is built.

use super::macros::phase_enum;
use std::fmt;
use thiserror::Error;

/// The scope a hook is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookScope {
    /// Runs for every event.
    Global,
    /// Runs for one event.
    Event,
    /// Runs for one transition of one event.
    Transition,
}

impl fmt::Display for HookScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Global => "Global",
            Self::Event => "Event",
            Self::Transition => "Transition",
        })
    }
}

/// A hook key that does not name a phase of its scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{key} is not a valid {scope} callback. The following are valid: {}", .valid.join(","))]
pub struct UnknownPhase {
    pub scope: HookScope,
    pub key: String,
    pub valid: &'static [&'static str],
}

phase_enum! {
    /// Phases of hooks that run for every event.
    pub enum GlobalPhase in Global {
        /// Before any event-scoped hook. An error aborts the dispatch.
        BeforeAllEvents => "before_all_events",
        /// After the event's own `after` hook.
        AfterAllEvents => "after_all_events",
        /// Last step of every dispatch, on every exit path.
        EnsureAllEvents => "ensure_all_events",
    }
}

phase_enum! {
    /// Phases of hooks bound to a single event.
    pub enum EventPhase in Event {
        /// Before transition selection. An error aborts the dispatch.
        Before => "before",
        /// After the transition's `success` hook.
        After => "after",
        /// Runs on every exit path, just before `ensure_all_events`.
        Ensure => "ensure",
    }
}

phase_enum! {
    /// Phases of hooks bound to a single transition.
    pub enum TransitionPhase in Transition {
        /// After selection, before the state is committed.
        After => "after",
        /// After commit and persistence.
        Success => "success",
    }
}

/// Any hook phase, tagged with its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPhase {
    Global(GlobalPhase),
    Event(EventPhase),
    Transition(TransitionPhase),
}

impl HookPhase {
    pub fn scope(&self) -> HookScope {
        match self {
            Self::Global(_) => HookScope::Global,
            Self::Event(_) => HookScope::Event,
            Self::Transition(_) => HookScope::Transition,
        }
    }
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global(phase) => write!(f, "{phase}"),
            Self::Event(phase) => write!(f, "event {phase}"),
            Self::Transition(phase) => write!(f, "transition {phase}"),
        }
    }
}

impl From<GlobalPhase> for HookPhase {
    fn from(phase: GlobalPhase) -> Self {
        Self::Global(phase)
    }
}

impl From<EventPhase> for HookPhase {
    fn from(phase: EventPhase) -> Self {
        Self::Event(phase)
    }
}

impl From<TransitionPhase> for HookPhase {
    fn from(phase: TransitionPhase) -> Self {
        Self::Transition(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_keys_parse() {
        for key in ["before_all_events", "after_all_events", "ensure_all_events"] {
            let phase: GlobalPhase = key.parse().unwrap();
            assert_eq!(phase.as_str(), key);
        }
    }

    #[test]
    fn event_keys_do_not_include_success() {
        assert!("success".parse::<EventPhase>().is_err());
        assert_eq!("ensure".parse::<EventPhase>(), Ok(EventPhase::Ensure));
    }

    #[test]
    fn transition_keys_do_not_include_before() {
        let err = "before".parse::<TransitionPhase>().unwrap_err();
        assert_eq!(err.scope, HookScope::Transition);
    }

    #[test]
    fn unknown_phase_lists_valid_keys() {
        let err = "not_a_global_callback".parse::<GlobalPhase>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "not_a_global_callback is not a valid Global callback. \
             The following are valid: before_all_events,after_all_events,ensure_all_events"
        );
    }

    #[test]
    fn hook_phase_reports_scope() {
        assert_eq!(HookPhase::from(EventPhase::After).scope(), HookScope::Event);
        assert_eq!(
            HookPhase::from(TransitionPhase::After).to_string(),
            "transition after"
        );
        assert_eq!(
            HookPhase::from(GlobalPhase::BeforeAllEvents).to_string(),
            "before_all_events"
        );
    }
}
