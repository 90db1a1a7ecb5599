//! Cross-session provider cache.
//!
//! Holds the last successfully retrieved full provider set across process
//! restarts. The cache is a bootstrap source only: it is consulted once, at
//! mount, when nothing more specific is available, and is overwritten on
//! every successful unfiltered fetch. All operations are best-effort; a
//! corrupt or unreadable file is the same as an empty cache.

use std::fs;
use std::path::PathBuf;

use crate::state::ProviderRecord;

/// Narrow store contract for the last known full provider set.
pub trait CrossSessionCache {
    /// Replace the cached set unconditionally.
    fn store(&mut self, records: &[ProviderRecord]);
    /// Last stored set, or `None` when never stored or unreadable.
    fn load(&self) -> Option<Vec<ProviderRecord>>;
}

/// On-disk cache: one JSON array of provider records.
#[derive(Clone, Debug)]
pub struct JsonFileCache {
    /// Location of the cache file.
    path: PathBuf,
}

impl JsonFileCache {
    /// Build a cache over the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CrossSessionCache for JsonFileCache {
    fn store(&mut self, records: &[ProviderRecord]) {
        if let Ok(s) = serde_json::to_string(records) {
            match fs::write(&self.path, &s) {
                Ok(()) => {
                    tracing::debug!(
                        path = %self.path.display(),
                        count = records.len(),
                        "[Persist] provider cache written"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "[Persist] failed to write provider cache"
                    );
                }
            }
        }
    }

    fn load(&self) -> Option<Vec<ProviderRecord>> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Vec<ProviderRecord>>(&text) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "[Persist] provider cache unreadable; treating as absent"
                );
                None
            }
        }
    }
}

/// In-memory cache used by tests and the `--print-cache` utility path.
#[derive(Clone, Debug, Default)]
pub struct MemoryCache {
    /// Last stored set, if any.
    records: Option<Vec<ProviderRecord>>,
}

impl CrossSessionCache for MemoryCache {
    fn store(&mut self, records: &[ProviderRecord]) {
        self.records = Some(records.to_vec());
    }

    fn load(&self) -> Option<Vec<ProviderRecord>> {
        self.records.clone()
    }
}
