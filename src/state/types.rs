//! Core value types used by docsea state.

/// One listed healthcare provider as returned by the directory API.
///
/// Records are value types: they are created by the retrieval layer (or the
/// synthetic fallback set) and never mutated afterwards; newer data replaces
/// a record wholesale.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    /// Stable identifier, unique within one retrieved set.
    pub id: u64,
    /// Display name, e.g. "Dr. Sophia Chen".
    #[serde(default)]
    pub name: String,
    /// Medical specialization, e.g. "Cardiologist".
    #[serde(default)]
    pub specialization: String,
    /// Clinic the provider practices at.
    #[serde(default)]
    pub clinic_name: String,
    /// Clinic city.
    #[serde(default)]
    pub city: String,
    /// Clinic country.
    #[serde(default)]
    pub country: String,
    /// Aggregate patient rating when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl PartialEq for ProviderRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ProviderRecord {}

impl ProviderRecord {
    /// Human-readable rating, or "not available" when the API reported none.
    #[must_use]
    pub fn rating_label(&self) -> String {
        self.rating
            .map_or_else(|| "not available".to_string(), |r| format!("★ {r:.1}"))
    }
}

/// The two independently settable listing filters.
///
/// An empty `specialization` means "all specialties"; an empty `query_text`
/// matches every name.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Free-text name filter entered by the user.
    #[serde(default)]
    pub query_text: String,
    /// Exact-match specialization filter; empty selects all.
    #[serde(default)]
    pub specialization: String,
}

impl SearchFilters {
    /// Whether both filters are unset (the "show everything" case).
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query_text.trim().is_empty() && self.specialization.is_empty()
    }
}

/// One immutable rendering of the listing view: the records shown, the
/// filters that produced them, and the scroll position at last departure.
///
/// Snapshots are overwritten, never merged; the serialized form is the
/// navigation-store payload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    /// Records in server/cache order; never re-sorted client-side.
    #[serde(default)]
    pub records: Vec<ProviderRecord>,
    /// Filters that produced `records`; may lag the displayed filters while
    /// a search is pending.
    #[serde(flatten)]
    pub filters: SearchFilters,
    /// Listing viewport row offset captured at last departure.
    #[serde(default)]
    pub scroll_offset: usize,
}

impl ListingSnapshot {
    /// Build a fresh snapshot with scroll reset to the top.
    #[must_use]
    pub fn new(records: Vec<ProviderRecord>, filters: SearchFilters) -> Self {
        Self {
            records,
            filters,
            scroll_offset: 0,
        }
    }

    /// Whether the snapshot carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Specializations offered by the listing selector, cycled in this order.
/// The leading empty entry is the "All Specialties" position.
pub const SPECIALIZATIONS: &[&str] = &[
    "",
    "Cardiologist",
    "Dentist",
    "Dermatologist",
    "Orthodontist",
    "Pediatrician",
];

/// Which screen currently owns the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// The searchable provider listing.
    Listing,
    /// The detail screen for one provider id.
    Detail(u64),
}

/// Retrieval request sent to the background search worker.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Filters to retrieve with.
    pub filters: SearchFilters,
    /// Which failure policy applies (search vs. cold-start load).
    pub kind: RequestKind,
}

/// Failure policy selector for a [`SearchRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// User-initiated search: never fails, terminal synthetic tier.
    Search,
    /// Cold-start unfiltered load: total failure yields an empty list.
    InitialLoad,
}

/// What a completed retrieval produced.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Snapshot to present, already filtered for the requested case.
    pub snapshot: ListingSnapshot,
    /// Unfiltered record set to write into the cross-session cache, when the
    /// strategy consumed one (full-set and synthetic cases only).
    pub full_set: Option<Vec<ProviderRecord>>,
}

/// Results corresponding to a prior [`SearchRequest`].
#[derive(Clone, Debug)]
pub struct SearchResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Retrieval product to apply.
    pub outcome: SearchOutcome,
}

/// Detail-screen fetch result for one provider id.
#[derive(Clone, Debug)]
pub struct DetailResponse {
    /// Requested provider id.
    pub id: u64,
    /// Fresh record when the endpoint answered; `None` keeps the listing copy.
    pub record: Option<ProviderRecord>,
}
