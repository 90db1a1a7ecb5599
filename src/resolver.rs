//! Mount-time query-intent resolution.
//!
//! Exactly one resolution runs per mount of the listing view. The sources of
//! truth are consulted in strict priority order: explicit search arguments
//! beat restored navigation state, which beats the cross-session cache, which
//! beats a cold-start fetch. The chain is synchronous and issues at most one
//! retrieval (via the returned [`Resolution`]); it never races two fetches
//! for the same mount.

use crate::cache::CrossSessionCache;
use crate::session::NavStateStore;
use crate::state::{ListingSnapshot, ProviderRecord, SearchFilters};

/// Outcome of the mount-time priority chain.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Explicit arguments carry the intent: adopt these filters and fetch
    /// fresh, superseding all stored state.
    ExplicitSearch {
        /// Filters taken verbatim from the invocation arguments.
        filters: SearchFilters,
    },
    /// A non-empty snapshot exists in the navigation store: adopt it
    /// verbatim, no re-fetch, and restore its scroll offset after render.
    Restored {
        /// The stored snapshot.
        snapshot: ListingSnapshot,
    },
    /// Nothing navigation-scoped, but the cross-session cache has records:
    /// adopt them as-is (unfiltered, no re-fetch).
    Bootstrapped {
        /// Cached full set.
        records: Vec<ProviderRecord>,
    },
    /// Nothing stored anywhere: perform a fresh unfiltered load.
    ColdStart,
}

/// What: Run the mount-time priority chain.
///
/// Inputs:
/// - `explicit`: Filters carried by the invocation arguments
/// - `nav`: Navigation-scoped store
/// - `cache`: Cross-session cache
///
/// Output:
/// - The highest-priority [`Resolution`] whose source is non-empty.
pub fn resolve_mount<N: NavStateStore, C: CrossSessionCache>(
    explicit: &SearchFilters,
    nav: &N,
    cache: &C,
) -> Resolution {
    if !explicit.is_unfiltered() {
        tracing::info!(
            query = %explicit.query_text,
            specialization = %explicit.specialization,
            "[Resolve] explicit search arguments win"
        );
        return Resolution::ExplicitSearch {
            filters: explicit.clone(),
        };
    }
    if let Some(snapshot) = nav.restore()
        && !snapshot.is_empty()
    {
        tracing::info!(
            records = snapshot.records.len(),
            offset = snapshot.scroll_offset,
            "[Resolve] restoring navigation-scoped listing state"
        );
        return Resolution::Restored { snapshot };
    }
    if let Some(records) = cache.load()
        && !records.is_empty()
    {
        tracing::info!(
            records = records.len(),
            "[Resolve] bootstrapping from cross-session cache"
        );
        return Resolution::Bootstrapped { records };
    }
    tracing::info!("[Resolve] cold start; fetching fresh provider set");
    Resolution::ColdStart
}

/// Restore whatever snapshot is current in the navigation store, for the
/// back-navigation handler. Runs unconditionally, independent of the
/// mount-time resolution.
pub fn resolve_history<N: NavStateStore>(nav: &N) -> Option<ListingSnapshot> {
    nav.restore()
}
