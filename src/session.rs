//! Navigation-scoped listing state.
//!
//! One serialized snapshot of the listing view (records, filters, scroll
//! offset) scoped to the running process: it survives in-app navigation
//! between the listing and detail screens but dies with the process, unlike
//! the cross-session cache. The payload round-trips through JSON so corrupt
//! state degrades to "absent" exactly like the on-disk stores.

use crate::state::ListingSnapshot;

/// Narrow store contract for the current listing snapshot.
pub trait NavStateStore {
    /// Persist the snapshot, replacing any previous one. Idempotent and
    /// cheap enough to call on every relevant state change.
    fn save(&mut self, snapshot: &ListingSnapshot);
    /// Last saved snapshot, or `None` when never saved or unreadable.
    fn restore(&self) -> Option<ListingSnapshot>;
}

/// Process-lifetime store holding one JSON payload.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    /// Serialized [`ListingSnapshot`], if one was saved.
    payload: Option<String>,
}

impl SessionStore {
    /// Build a store preloaded with a raw payload. Used by tests to model
    /// corrupt state.
    #[must_use]
    pub fn with_payload(payload: String) -> Self {
        Self {
            payload: Some(payload),
        }
    }
}

impl NavStateStore for SessionStore {
    fn save(&mut self, snapshot: &ListingSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(s) => {
                tracing::trace!(
                    records = snapshot.records.len(),
                    offset = snapshot.scroll_offset,
                    "[Session] listing state saved"
                );
                self.payload = Some(s);
            }
            Err(e) => {
                tracing::warn!(error = %e, "[Session] failed to serialize listing state");
            }
        }
    }

    fn restore(&self) -> Option<ListingSnapshot> {
        let raw = self.payload.as_ref()?;
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::debug!(error = %e, "[Session] listing state unreadable; treating as absent");
                None
            }
        }
    }
}
