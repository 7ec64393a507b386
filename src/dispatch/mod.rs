//! Event dispatch: the state machine, the context hooks receive, and the
//! ordered hook pipeline around each transition.

mod context;
mod error;
mod machine;
mod pipeline;

pub use context::Dispatch;
pub use error::FsmError;
pub use machine::Machine;
