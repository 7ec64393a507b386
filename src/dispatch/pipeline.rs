//! Hook invocation for each pipeline phase.
//!
//! Order of a dispatch:
//!
//! ```text
//! before_all_events -> before(event)
//!   -> selection -> after(transition) -> commit -> persist -> success(transition)
//! -> after(event) -> after_all_events
//! -> ensure(event) -> ensure_all_events
//! ```
//!
//! Errors from `before` phases abort; everything after selection only logs.

use crate::core::{EventPhase, GlobalPhase, HookPhase, TransitionPhase};
use crate::dispatch::Dispatch;
use crate::model::{HookResult, Transition};
use tracing::warn;

pub(crate) fn run_global(ctx: &Dispatch<'_>, phase: GlobalPhase) -> HookResult {
    match ctx.machine().definition().global_hook(phase) {
        Some(hook) => hook(ctx),
        None => Ok(()),
    }
}

pub(crate) fn run_event(ctx: &Dispatch<'_>, phase: EventPhase) -> HookResult {
    match ctx.event().hook(phase) {
        Some(hook) => hook(ctx),
        None => Ok(()),
    }
}

pub(crate) fn run_transition(
    ctx: &Dispatch<'_>,
    transition: &Transition,
    phase: TransitionPhase,
) -> HookResult {
    match transition.hook(phase) {
        Some(hook) => hook(ctx, transition),
        None => Ok(()),
    }
}

/// Log a hook error that does not affect the outcome of the dispatch.
pub(crate) fn observe(ctx: &Dispatch<'_>, phase: impl Into<HookPhase>, result: HookResult) {
    if let Err(err) = result {
        let phase: HookPhase = phase.into();
        warn!(
            event = ctx.event_name(),
            phase = %phase,
            error = %err,
            "hook failed; continuing"
        );
    }
}

/// Runs the event `ensure` hook and then `ensure_all_events` when dropped.
///
/// Armed once the event is resolved, so the pair runs exactly once on every
/// exit path that follows, including early returns and unwinding.
pub(crate) struct EnsureGuard<'a, 'm> {
    ctx: &'a Dispatch<'m>,
}

impl<'a, 'm> EnsureGuard<'a, 'm> {
    pub(crate) fn arm(ctx: &'a Dispatch<'m>) -> Self {
        Self { ctx }
    }
}

impl Drop for EnsureGuard<'_, '_> {
    fn drop(&mut self) {
        observe(
            self.ctx,
            EventPhase::Ensure,
            run_event(self.ctx, EventPhase::Ensure),
        );
        observe(
            self.ctx,
            GlobalPhase::EnsureAllEvents,
            run_global(self.ctx, GlobalPhase::EnsureAllEvents),
        );
    }
}
