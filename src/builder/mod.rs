//! Builder API for ergonomic state machine construction.
//!
//! Builders collect configuration without judging it; `MachineBuilder::build`
//! runs the validator and either returns a live machine or every problem it
//! found.

pub mod error;
pub mod event;
pub mod machine;
pub mod options;
pub mod transition;
mod validate;

pub use error::BuildError;
pub use event::EventBuilder;
pub use machine::MachineBuilder;
pub use options::{MachineOptions, DEFAULT_MAX_DEPTH};
pub use transition::TransitionBuilder;

/// Create an unconditional transition.
///
/// # Example
///
/// ```
/// use statehook::builder::{simple_transition, EventBuilder, MachineBuilder};
///
/// let machine = MachineBuilder::new()
///     .initial("locked")
///     .event(EventBuilder::new("coin").transition(simple_transition("locked", "unlocked")))
///     .build()
///     .unwrap();
///
/// machine.fire("coin").unwrap();
/// assert_eq!(machine.current_state(), "unlocked");
/// ```
pub fn simple_transition(from: impl Into<String>, to: impl Into<String>) -> TransitionBuilder {
    TransitionBuilder::between(from, to)
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use statehook::builder::{guarded_transition, EventBuilder, MachineBuilder};
///
/// let machine = MachineBuilder::new()
///     .initial("locked")
///     .event(EventBuilder::new("push").transition(guarded_transition("locked", "open", || false)))
///     .build()
///     .unwrap();
///
/// assert!(machine.fire("push").is_err());
/// assert_eq!(machine.current_state(), "locked");
/// ```
pub fn guarded_transition<F>(from: impl Into<String>, to: impl Into<String>, guard: F) -> TransitionBuilder
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    TransitionBuilder::between(from, to).when(guard)
}
