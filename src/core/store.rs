//! Lock-guarded holder for the current state label.

use parking_lot::RwLock;

/// Holds the machine's current state label.
///
/// Reads take a shared lock and writes an exclusive one. Each lock is held
/// only for the single read or write, never across a dispatch, so hooks can
/// fire further events on the same machine.
#[derive(Debug)]
pub struct StateStore {
    current: RwLock<String>,
}

impl StateStore {
    pub(crate) fn new(initial: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(initial.into()),
        }
    }

    /// The current state label.
    pub fn current(&self) -> String {
        self.current.read().clone()
    }

    /// Replace the current label unconditionally, returning the previous one.
    pub(crate) fn set(&self, label: &str) -> String {
        let mut current = self.current.write();
        std::mem::replace(&mut *current, label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn store_starts_at_initial_label() {
        let store = StateStore::new("start");
        assert_eq!(store.current(), "start");
    }

    #[test]
    fn set_returns_previous_label() {
        let store = StateStore::new("start");
        let previous = store.set("finished");

        assert_eq!(previous, "start");
        assert_eq!(store.current(), "finished");
    }

    #[test]
    fn store_is_shared_across_threads() {
        let store = Arc::new(StateStore::new("idle"));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.set(&format!("worker_{i}"));
                    store.current()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().starts_with("worker_"));
        }
        assert!(store.current().starts_with("worker_"));
    }
}
