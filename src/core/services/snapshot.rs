//! Snapshot store
//!
//! Persists the whole [`SessionState`] as one JSON value under a single key,
//! so a reload loses at most the operation in flight.

use anyhow::Context;

use crate::core::models::SessionState;
use crate::core::ports::KeyValueStore;

/// Key the session snapshot lives under
pub const SNAPSHOT_KEY: &str = "scanProgress";

/// Whole-session persistence on top of a key/value store
pub struct SnapshotStore {
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for SnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotStore").field("key", &SNAPSHOT_KEY).finish_non_exhaustive()
    }
}

impl SnapshotStore {
    /// Wrap a key/value store
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite the snapshot with `state`
    pub fn save(&self, state: &SessionState) -> anyhow::Result<()> {
        let encoded = serde_json::to_string(state).context("failed to encode session snapshot")?;
        self.store.set(SNAPSHOT_KEY, &encoded).context("failed to write session snapshot")?;
        log::debug!("saved snapshot ({} bytes)", encoded.len());
        Ok(())
    }

    /// Load the last saved state
    ///
    /// Returns `None` when nothing was saved, or when the stored value cannot
    /// be read, decoded or fails its consistency checks. Never errors:
    /// callers fall back to an empty session.
    #[must_use]
    pub fn restore(&self) -> Option<SessionState> {
        let raw = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("could not read session snapshot: {err:#}");
                return None;
            },
        };

        let state: SessionState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("discarding corrupt session snapshot: {err}");
                return None;
            },
        };

        if !state.is_consistent() {
            log::warn!("discarding inconsistent session snapshot");
            return None;
        }

        Some(state)
    }

    /// Delete the snapshot
    pub fn purge(&self) -> anyhow::Result<()> {
        self.store.delete(SNAPSHOT_KEY).context("failed to delete session snapshot")
    }
}
