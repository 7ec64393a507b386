//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::event::EventBuilder;
use crate::builder::options::MachineOptions;
use crate::builder::validate::{self, Draft, Validated};
use crate::checkpoint::Checkpoint;
use crate::core::{GlobalPhase, UnknownPhase};
use crate::dispatch::{Dispatch, Machine};
use crate::model::{EventHook, HookResult, Persister};
use tracing::debug;

/// Builder for constructing state machines with a fluent API.
///
/// Setup calls are applied in order; problems are collected and reported
/// together by [`build`](Self::build).
#[derive(Default)]
pub struct MachineBuilder {
    initial: Option<String>,
    events: Vec<EventBuilder>,
    global_hooks: Vec<(Result<GlobalPhase, UnknownPhase>, EventHook)>,
    persister: Option<Box<dyn Persister>>,
    options: MachineOptions,
    resume: Option<Checkpoint>,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Register an event. A later event with the same name replaces it.
    pub fn event(mut self, event: EventBuilder) -> Self {
        self.events.push(event);
        self
    }

    /// Register several events at once.
    pub fn events(mut self, events: impl IntoIterator<Item = EventBuilder>) -> Self {
        self.events.extend(events);
        self
    }

    /// Bind a hook that runs for every event.
    pub fn global<F>(mut self, phase: GlobalPhase, hook: F) -> Self
    where
        F: Fn(&Dispatch<'_>) -> HookResult + Send + Sync + 'static,
    {
        self.global_hooks.push((Ok(phase), Box::new(hook)));
        self
    }

    /// Bind a global hook by its string key, e.g. `"after_all_events"`.
    pub fn global_named<F>(mut self, key: &str, hook: F) -> Self
    where
        F: Fn(&Dispatch<'_>) -> HookResult + Send + Sync + 'static,
    {
        self.global_hooks.push((key.parse(), Box::new(hook)));
        self
    }

    /// Set the persister called after each committed transition.
    pub fn persist<P>(mut self, persister: P) -> Self
    where
        P: Persister + 'static,
    {
        self.persister = Some(Box::new(persister));
        self
    }

    /// Set the persister from a closure.
    pub fn persist_fn<F>(self, persist: F) -> Self
    where
        F: Fn(&str) -> HookResult + Send + Sync + 'static,
    {
        self.persist(persist)
    }

    pub fn options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Start in the checkpoint's state instead of the initial state.
    pub fn resume_from(mut self, checkpoint: &Checkpoint) -> Self {
        self.resume = Some(checkpoint.clone());
        self
    }

    /// Validate the configuration and build the machine.
    pub fn build(self) -> Result<Machine, BuildError> {
        let Validated { definition, start } = validate::validate(Draft {
            initial: self.initial,
            events: self.events,
            global_hooks: self.global_hooks,
            options: &self.options,
            resume: self.resume.as_ref(),
        })?;

        debug!(
            initial = definition.initial_state(),
            start = %start,
            events = definition.event_names().len(),
            states = definition.states().len(),
            "state machine built"
        );

        Ok(Machine::new(definition, start, self.persister, self.options))
    }
}
