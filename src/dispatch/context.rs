//! The per-dispatch context handed to every hook.

use crate::dispatch::{FsmError, Machine};
use crate::model::{Event, HookError};
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt;

/// A dispatch in progress.
///
/// Hooks receive this instead of bare machine and event references. Besides
/// access to both, it carries the event arguments, the chain of event names
/// that led to this dispatch, and a slot for an error to report back to the
/// caller.
pub struct Dispatch<'m> {
    machine: &'m Machine,
    event: &'m Event,
    args: Vec<Value>,
    chain: Vec<String>,
    reported: Mutex<Option<HookError>>,
}

impl<'m> Dispatch<'m> {
    pub(crate) fn new(
        machine: &'m Machine,
        event: &'m Event,
        args: Vec<Value>,
        chain: Vec<String>,
    ) -> Self {
        Self {
            machine,
            event,
            args,
            chain,
            reported: Mutex::new(None),
        }
    }

    pub fn machine(&self) -> &'m Machine {
        self.machine
    }

    pub fn event(&self) -> &'m Event {
        self.event
    }

    pub fn event_name(&self) -> &str {
        self.event.name()
    }

    /// Arguments passed to `fire_with`. The engine never inspects them.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Event names from the outermost dispatch down to this one.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Nesting depth; 1 for a dispatch fired directly by the host.
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// Fire another event on the same machine as part of this chain.
    pub fn fire(&self, name: &str) -> Result<(), FsmError> {
        self.fire_with(name, Vec::new())
    }

    /// Fire another event with arguments as part of this chain.
    pub fn fire_with(&self, name: &str, args: Vec<Value>) -> Result<(), FsmError> {
        self.machine.dispatch(name, args, &self.chain)
    }

    /// Record an error to return to the caller once the dispatch succeeds.
    ///
    /// A later report replaces an earlier one. Reports made from `ensure`
    /// hooks arrive after the result is decided and are dropped.
    pub fn report(&self, err: impl Into<HookError>) {
        *self.reported.lock() = Some(err.into());
    }

    pub(crate) fn take_reported(&self) -> Option<HookError> {
        self.reported.lock().take()
    }
}

impl fmt::Debug for Dispatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("event", &self.event.name())
            .field("args", &self.args)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
