//! Statehook: an embeddable finite state machine with lifecycle hooks
//!
//! A host declares events, each bundling guarded candidate transitions
//! between string-labelled states, and drives the machine by firing events.
//! The engine selects a transition, runs the host's hooks in a fixed order,
//! commits the new state and hands it to an optional persister.
//!
//! # Core Concepts
//!
//! - **Event**: a named operation with ordered candidate transitions
//! - **Transition**: an edge from a set of source labels to one target label
//! - **Guard**: a zero-argument predicate gating a transition
//! - **Hook**: host code run at a fixed pipeline phase, in global, event or
//!   transition scope
//! - **Persister**: host code recording each newly committed state
//!
//! # Hook order
//!
//! ```text
//! before_all_events -> before(event)
//!   -> selection -> after(transition) -> commit -> persist -> success(transition)
//! -> after(event) -> after_all_events
//! -> ensure(event) -> ensure_all_events
//! ```
//!
//! Errors from `before` phases abort the dispatch with the state unchanged.
//! Errors from later phases are logged and do not stop the pipeline; a hook
//! that wants the caller to see an error records it with
//! [`Dispatch::report`].
//!
//! # Example
//!
//! ```rust
//! use statehook::{EventBuilder, EventPhase, MachineBuilder, TransitionBuilder};
//!
//! let machine = MachineBuilder::new()
//!     .initial("start")
//!     .event(
//!         EventBuilder::new("first_event")
//!             .transition(TransitionBuilder::between("start", "succeeded_first"))
//!             .on(EventPhase::After, |ctx| ctx.fire("second_event").map_err(Into::into)),
//!     )
//!     .event(
//!         EventBuilder::new("second_event")
//!             .transition(TransitionBuilder::between("succeeded_first", "completed")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! machine.fire("first_event").unwrap();
//! assert_eq!(machine.current_state(), "completed");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod dispatch;
pub mod model;

// Re-export commonly used types
pub use crate::builder::{BuildError, EventBuilder, MachineBuilder, MachineOptions, TransitionBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{EventPhase, GlobalPhase, Guard, HookPhase, HookScope, TransitionPhase};
pub use crate::dispatch::{Dispatch, FsmError, Machine};
pub use crate::model::{HookError, HookResult, Persister};
