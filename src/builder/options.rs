//! Runtime options for a machine.

use serde::{Deserialize, Serialize};

/// Default limit on nested dispatch depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunable machine settings.
///
/// Deserializable so hosts can keep them alongside their own configuration;
/// missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use statehook::MachineOptions;
///
/// let options = MachineOptions::from_json(r#"{ "max_depth": 8 }"#).unwrap();
/// assert_eq!(options.max_depth, 8);
///
/// let defaults = MachineOptions::from_json("{}").unwrap();
/// assert_eq!(defaults, MachineOptions::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Maximum length of a chain of nested dispatches, counting the
    /// outermost one. Firing beyond it returns `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MachineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_deep_chains() {
        assert_eq!(MachineOptions::new().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn options_serialize_correctly() {
        let options = MachineOptions::new().with_max_depth(3);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"max_depth":3}"#);
        assert_eq!(MachineOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn malformed_options_are_rejected() {
        assert!(MachineOptions::from_json(r#"{ "max_depth": "deep" }"#).is_err());
    }
}
