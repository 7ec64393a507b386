//! Construction-time validation of a machine definition.
//!
//! Every problem is collected with `Validation` rather than stopping at the
//! first, so a host sees its whole misconfiguration in one build attempt.

use crate::builder::{BuildError, EventBuilder, MachineOptions, TransitionBuilder};
use crate::checkpoint::Checkpoint;
use crate::core::{GlobalPhase, Guard, UnknownPhase};
use crate::model::{derive_states, Definition, Event, EventHook, Transition};
use std::collections::HashMap;
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type Check = Validation<(), NonEmptyVec<BuildError>>;

/// Everything the builder collected, before validation.
pub(crate) struct Draft<'a> {
    pub initial: Option<String>,
    pub events: Vec<EventBuilder>,
    pub global_hooks: Vec<(Result<GlobalPhase, UnknownPhase>, EventHook)>,
    pub options: &'a MachineOptions,
    pub resume: Option<&'a Checkpoint>,
}

/// A definition that passed validation, and the label to start in.
pub(crate) struct Validated {
    pub definition: Definition,
    pub start: String,
}

pub(crate) fn validate(draft: Draft<'_>) -> Result<Validated, BuildError> {
    let mut hook_checks = Vec::new();
    let global_hooks = bind_hooks(draft.global_hooks, &mut hook_checks);

    let mut events = HashMap::new();
    for builder in draft.events {
        let event = assemble_event(builder, &mut hook_checks);
        if let Some(replaced) = events.insert(event.name.clone(), event) {
            debug!(event = %replaced.name, "event declared twice; keeping the later one");
        }
    }
    let states = derive_states(events.values());

    let mut checks: Vec<Check> = vec![match &draft.initial {
        None => Validation::fail(BuildError::MissingInitialState),
        Some(label) if label.is_empty() => Validation::fail(BuildError::MissingInitialState),
        Some(label) if !events.is_empty() && !states.contains(label) => {
            Validation::fail(BuildError::UnknownInitialState(label.clone()))
        }
        Some(_) => Validation::success(()),
    }];
    checks.push(check(!events.is_empty(), || BuildError::NoEvents));
    checks.push(check(draft.options.max_depth > 0, || {
        BuildError::InvalidMaxDepth
    }));
    if let Some(checkpoint) = draft.resume {
        checks.push(check(states.contains(&checkpoint.current_state), || {
            BuildError::UnknownCheckpointState(checkpoint.current_state.clone())
        }));
    }
    checks.extend(hook_checks);

    if let Validation::Failure(errors) = Validation::all_vec(checks) {
        return Err(BuildError::from_problems(errors.iter().cloned().collect()));
    }

    let Some(initial) = draft.initial else {
        return Err(BuildError::MissingInitialState);
    };
    let start = draft
        .resume
        .map(|checkpoint| checkpoint.current_state.clone())
        .unwrap_or_else(|| initial.clone());

    Ok(Validated {
        definition: Definition {
            initial_state: initial,
            events,
            states,
            global_hooks,
        },
        start,
    })
}

fn check(ok: bool, error: impl FnOnce() -> BuildError) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

/// Key hooks by phase, recording a failed check for each unknown key.
fn bind_hooks<P, H>(hooks: Vec<(Result<P, UnknownPhase>, H)>, checks: &mut Vec<Check>) -> HashMap<P, H>
where
    P: Eq + Hash,
{
    let mut bound = HashMap::new();
    for (key, hook) in hooks {
        match key {
            Ok(phase) => {
                bound.insert(phase, hook);
            }
            Err(unknown) => checks.push(Validation::fail(BuildError::UnknownCallback(unknown))),
        }
    }
    bound
}

fn assemble_event(builder: EventBuilder, checks: &mut Vec<Check>) -> Event {
    let EventBuilder {
        name,
        transitions: transition_builders,
        guards,
        hooks,
    } = builder;

    let hooks = bind_hooks(hooks, checks);
    let mut transitions = Vec::with_capacity(transition_builders.len());
    for (index, transition) in transition_builders.into_iter().enumerate() {
        if let Some(transition) = assemble_transition(&name, index, transition, &guards, checks) {
            transitions.push(transition);
        }
    }

    Event {
        name,
        transitions,
        guards,
        hooks,
    }
}

fn assemble_transition(
    event: &str,
    index: usize,
    builder: TransitionBuilder,
    event_guards: &[Guard],
    checks: &mut Vec<Check>,
) -> Option<Transition> {
    let TransitionBuilder {
        from,
        to,
        mut guards,
        hooks,
    } = builder;

    let hooks = bind_hooks(hooks, checks);
    if from.is_empty() {
        checks.push(Validation::fail(BuildError::MissingFromState {
            event: event.to_string(),
            index,
        }));
    }
    let Some(to) = to else {
        checks.push(Validation::fail(BuildError::MissingToState {
            event: event.to_string(),
            index,
        }));
        return None;
    };
    if from.is_empty() {
        return None;
    }

    guards.extend(event_guards.iter().cloned());
    Some(Transition {
        from,
        to,
        guards,
        hooks,
    })
}
