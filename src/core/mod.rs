//! Building blocks shared by the definition model and the dispatcher:
//! - Guard predicates for transition selection
//! - The closed set of hook phases per scope
//! - The lock-guarded store for the current state label

mod guard;
mod macros;
mod phase;
mod store;

pub use guard::{all_pass, Guard};
pub use phase::{EventPhase, GlobalPhase, HookPhase, HookScope, TransitionPhase, UnknownPhase};
pub use store::StateStore;
