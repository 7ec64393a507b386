//! The state machine: event lookup, transition selection and commit.

use crate::builder::{MachineBuilder, MachineOptions};
use crate::core::{EventPhase, GlobalPhase, StateStore, TransitionPhase};
use crate::dispatch::context::Dispatch;
use crate::dispatch::error::FsmError;
use crate::dispatch::pipeline::{self, EnsureGuard};
use crate::model::{Definition, Persister};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, debug_span, warn};

/// A validated state machine.
///
/// Built with [`MachineBuilder`]. The definition never changes after
/// construction; only the current state label does, at most once per
/// successful dispatch.
///
/// `Machine` is `Send + Sync`. The state lock is held only for individual
/// reads and writes, so hooks may fire further events on the same machine
/// while a dispatch is in progress. Two dispatches racing on different
/// threads are not serialized: one may select a transition from a state the
/// other has already left.
pub struct Machine {
    definition: Definition,
    store: StateStore,
    persister: Option<Box<dyn Persister>>,
    options: MachineOptions,
}

impl Machine {
    pub(crate) fn new(
        definition: Definition,
        start: String,
        persister: Option<Box<dyn Persister>>,
        options: MachineOptions,
    ) -> Self {
        Self {
            definition,
            store: StateStore::new(start),
            persister,
            options,
        }
    }

    /// Start building a machine.
    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    /// The current state label.
    pub fn current_state(&self) -> String {
        self.store.current()
    }

    pub fn initial_state(&self) -> &str {
        self.definition.initial_state()
    }

    /// Every label named by any transition.
    pub fn states(&self) -> &BTreeSet<String> {
        self.definition.states()
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        self.definition.event_names()
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Whether `name` would currently select a transition.
    ///
    /// Evaluates guards but runs no hooks and changes nothing.
    pub fn can_fire(&self, name: &str) -> bool {
        self.definition
            .event(name)
            .is_some_and(|event| event.select(&self.store.current()).is_some())
    }

    /// Fire an event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statehook::{EventBuilder, FsmError, MachineBuilder, TransitionBuilder};
    ///
    /// let machine = MachineBuilder::new()
    ///     .initial("start")
    ///     .event(
    ///         EventBuilder::new("first_event")
    ///             .transition(TransitionBuilder::between("start", "succeeded_first")),
    ///     )
    ///     .build()
    ///     .unwrap();
    ///
    /// machine.fire("first_event").unwrap();
    /// assert_eq!(machine.current_state(), "succeeded_first");
    ///
    /// let err = machine.fire("first_event").unwrap_err();
    /// assert!(matches!(err, FsmError::CannotTransition { .. }));
    /// ```
    pub fn fire(&self, name: &str) -> Result<(), FsmError> {
        self.dispatch(name, Vec::new(), &[])
    }

    /// Fire an event with arguments for its hooks.
    pub fn fire_with(&self, name: &str, args: Vec<Value>) -> Result<(), FsmError> {
        self.dispatch(name, args, &[])
    }

    pub(crate) fn dispatch(
        &self,
        name: &str,
        args: Vec<Value>,
        parent: &[String],
    ) -> Result<(), FsmError> {
        let mut chain = Vec::with_capacity(parent.len() + 1);
        chain.extend_from_slice(parent);
        chain.push(name.to_string());

        let span = debug_span!("dispatch", event = name, depth = chain.len());
        let _entered = span.enter();

        if parent.len() >= self.options.max_depth {
            warn!(chain = %chain.join(" -> "), "dispatch depth limit reached");
            return Err(FsmError::DepthExceeded {
                max_depth: self.options.max_depth,
                chain,
            });
        }

        let Some(event) = self.definition.event(name) else {
            debug!("event not registered");
            return Err(FsmError::EventNotRegistered {
                event: name.to_string(),
            });
        };

        let ctx = Dispatch::new(self, event, args, chain);
        let _ensure = EnsureGuard::arm(&ctx);

        pipeline::run_global(&ctx, GlobalPhase::BeforeAllEvents).map_err(|source| {
            FsmError::Hook {
                event: name.to_string(),
                phase: GlobalPhase::BeforeAllEvents.into(),
                source,
            }
        })?;
        pipeline::run_event(&ctx, EventPhase::Before).map_err(|source| FsmError::Hook {
            event: name.to_string(),
            phase: EventPhase::Before.into(),
            source,
        })?;

        let current = self.store.current();
        let Some(transition) = event.select(&current) else {
            debug!(state = %current, "no transition available");
            return Err(FsmError::CannotTransition {
                state: current,
                event: name.to_string(),
            });
        };

        pipeline::observe(
            &ctx,
            TransitionPhase::After,
            pipeline::run_transition(&ctx, transition, TransitionPhase::After),
        );

        let previous = self.store.set(transition.to());
        debug!(from = %previous, to = transition.to(), "state committed");

        if let Some(persister) = &self.persister {
            if let Err(source) = persister.persist(transition.to()) {
                warn!(state = transition.to(), error = %source, "persist failed after commit");
                return Err(FsmError::PersistFailed {
                    event: name.to_string(),
                    source,
                });
            }
        }

        pipeline::observe(
            &ctx,
            TransitionPhase::Success,
            pipeline::run_transition(&ctx, transition, TransitionPhase::Success),
        );
        pipeline::observe(
            &ctx,
            EventPhase::After,
            pipeline::run_event(&ctx, EventPhase::After),
        );
        pipeline::observe(
            &ctx,
            GlobalPhase::AfterAllEvents,
            pipeline::run_global(&ctx, GlobalPhase::AfterAllEvents),
        );

        match ctx.take_reported() {
            Some(source) => Err(FsmError::Reported {
                event: name.to_string(),
                source,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current_state", &self.store.current())
            .field("initial_state", &self.definition.initial_state())
            .field("events", &self.definition.event_names())
            .field("persister", &self.persister.is_some())
            .field("options", &self.options)
            .finish()
    }
}
