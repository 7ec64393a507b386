//! Errors returned from firing an event.

use crate::core::HookPhase;
use crate::model::HookError;
use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// Every variant except `PersistFailed` and `Reported` leaves the current
/// state unchanged.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error("{event} is not registered.")]
    EventNotRegistered { event: String },

    #[error("Cannot transition from {state} when calling {event}.")]
    CannotTransition { state: String, event: String },

    /// The persister failed after the new state was committed.
    #[error("Persist failed for {event}: {source}")]
    PersistFailed { event: String, source: HookError },

    /// A `before_all_events` or event `before` hook aborted the dispatch.
    #[error("{phase} hook aborted {event}: {source}")]
    Hook {
        event: String,
        phase: HookPhase,
        source: HookError,
    },

    /// A hook recorded an error through the dispatch context on an otherwise
    /// successful dispatch.
    #[error("{event} reported: {source}")]
    Reported { event: String, source: HookError },

    #[error("Dispatch depth limit of {max_depth} reached: {}", .chain.join(" -> "))]
    DepthExceeded { max_depth: usize, chain: Vec<String> },
}

impl FsmError {
    /// Name of the event whose dispatch produced this error.
    pub fn event(&self) -> &str {
        match self {
            Self::EventNotRegistered { event }
            | Self::CannotTransition { event, .. }
            | Self::PersistFailed { event, .. }
            | Self::Hook { event, .. }
            | Self::Reported { event, .. } => event,
            Self::DepthExceeded { chain, .. } => chain.last().map(String::as_str).unwrap_or(""),
        }
    }

    /// Whether the state may have changed despite the error.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::PersistFailed { .. } | Self::Reported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventPhase;

    #[test]
    fn event_not_registered_message() {
        let err = FsmError::EventNotRegistered {
            event: "not_an_event".to_string(),
        };
        assert_eq!(err.to_string(), "not_an_event is not registered.");
        assert_eq!(err.event(), "not_an_event");
    }

    #[test]
    fn cannot_transition_message() {
        let err = FsmError::CannotTransition {
            state: "initial".to_string(),
            event: "not_an_event".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot transition from initial when calling not_an_event."
        );
        assert!(!err.is_committed());
    }

    #[test]
    fn persist_failed_message_includes_cause() {
        let err = FsmError::PersistFailed {
            event: "event".to_string(),
            source: "something broke".into(),
        };
        assert_eq!(err.to_string(), "Persist failed for event: something broke");
        assert!(err.is_committed());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn hook_error_names_phase() {
        let err = FsmError::Hook {
            event: "first_event".to_string(),
            phase: EventPhase::Before.into(),
            source: "nope".into(),
        };
        assert_eq!(err.to_string(), "event before hook aborted first_event: nope");
    }

    #[test]
    fn depth_exceeded_shows_chain() {
        let err = FsmError::DepthExceeded {
            max_depth: 2,
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(err.to_string(), "Dispatch depth limit of 2 reached: a -> b -> a");
        assert_eq!(err.event(), "a");
    }
}
