//! Snapshots of a machine's current state, and resuming from them.
//!
//! A checkpoint records only labels. Hooks, guards and the persister are
//! code and are supplied again when the machine is rebuilt:
//!
//! ```rust
//! use statehook::{Checkpoint, EventBuilder, MachineBuilder, TransitionBuilder};
//!
//! fn build(checkpoint: Option<&Checkpoint>) -> statehook::Machine {
//!     let mut builder = MachineBuilder::new()
//!         .initial("draft")
//!         .event(EventBuilder::new("submit").transition(TransitionBuilder::between("draft", "review")));
//!     if let Some(checkpoint) = checkpoint {
//!         builder = builder.resume_from(checkpoint);
//!     }
//!     builder.build().unwrap()
//! }
//!
//! let machine = build(None);
//! machine.fire("submit").unwrap();
//! let json = machine.checkpoint().to_json().unwrap();
//!
//! let restored = build(Some(&Checkpoint::from_json(&json).unwrap()));
//! assert_eq!(restored.current_state(), "review");
//! ```

use crate::dispatch::Machine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's state labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: String,

    /// Current state of the machine
    pub current_state: String,
}

impl Checkpoint {
    pub fn new(initial_state: impl Into<String>, current_state: impl Into<String>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            initial_state: initial_state.into(),
            current_state: current_state.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::encode("json", e))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::decode("json", e))?;
        checkpoint.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode("binary", e))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::decode("binary", e))?;
        checkpoint.check_version()
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version > CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

impl Machine {
    /// Snapshot the current state.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.initial_state(), self.current_state())
    }
}
