//! Build errors for machine, event and transition builders.

use crate::core::UnknownPhase;
use thiserror::Error;

/// Configuration problems found when building a machine.
///
/// The validator collects every problem it finds. A single problem is
/// returned as itself; several are returned together as `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("You must set an initial state. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' was not found in the registered states")]
    UnknownInitialState(String),

    #[error("You must define at least 1 event")]
    NoEvents,

    #[error(transparent)]
    UnknownCallback(#[from] UnknownPhase),

    #[error("Transition {index} of event '{event}' has no source state. Call .from(state)")]
    MissingFromState { event: String, index: usize },

    #[error("Transition {index} of event '{event}' has no target state. Call .to(state)")]
    MissingToState { event: String, index: usize },

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,

    #[error("Checkpoint state '{0}' was not found in the registered states")]
    UnknownCheckpointState(String),

    #[error("{} configuration problems: {}", .0.len(), join(.0))]
    Invalid(Vec<BuildError>),
}

impl BuildError {
    pub(crate) fn from_problems(mut problems: Vec<BuildError>) -> Self {
        if problems.len() == 1 {
            problems.remove(0)
        } else {
            BuildError::Invalid(problems)
        }
    }

    /// Every individual problem, flattening `Invalid`.
    pub fn problems(&self) -> Vec<&BuildError> {
        match self {
            BuildError::Invalid(problems) => problems.iter().collect(),
            other => vec![other],
        }
    }
}

fn join(problems: &[BuildError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
