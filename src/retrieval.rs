//! Tiered retrieval of provider records.
//!
//! A retrieval request is dispatched on the shape of its filters: unfiltered
//! and combined searches fetch the full set (primary endpoint, then the
//! list-all fallback), server-filterable cases call the matching endpoint
//! directly. Transport failure on a search falls through to a fixed synthetic
//! placeholder set so the listing never shows a hard error; only the
//! cold-start load surfaces an empty listing instead.

use crate::api::{ApiResult, DirectoryApi};
use crate::state::{ListingSnapshot, ProviderRecord, RequestKind, SearchFilters, SearchOutcome};

/// Which retrieval strategy a filter combination selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterCase {
    /// Both filters empty: full set via the tier chain.
    Unfiltered,
    /// Specialization only: server-side category endpoint.
    BySpecialization,
    /// Query text only: server-side name search endpoint.
    ByName,
    /// Both set: full set via the tier chain, filtered client-side.
    Combined,
}

/// Ordered full-set retrieval tiers; evaluated first to last, first usable
/// result short-circuits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FullSetTier {
    /// Primary `/providers` endpoint.
    Primary,
    /// Secondary `/providers/all` endpoint.
    ListAll,
}

/// Tier evaluation order for full-set fetches.
const FULL_SET_TIERS: &[FullSetTier] = &[FullSetTier::Primary, FullSetTier::ListAll];

/// Classify a filter combination into its retrieval case.
fn classify(filters: &SearchFilters) -> FilterCase {
    let has_query = !filters.query_text.trim().is_empty();
    let has_spec = !filters.specialization.is_empty();
    match (has_spec, has_query) {
        (false, false) => FilterCase::Unfiltered,
        (true, false) => FilterCase::BySpecialization,
        (false, true) => FilterCase::ByName,
        (true, true) => FilterCase::Combined,
    }
}

/// Whether `record` satisfies the combined-filter predicate: name contains
/// the query text (case-insensitive substring, empty matches all) and the
/// specialization matches exactly (case-insensitive, empty matches all).
#[must_use]
pub fn matches_filters(record: &ProviderRecord, filters: &SearchFilters) -> bool {
    let query = filters.query_text.trim().to_lowercase();
    let name_ok = query.is_empty() || record.name.to_lowercase().contains(&query);
    let spec_ok = filters.specialization.is_empty()
        || record
            .specialization
            .eq_ignore_ascii_case(&filters.specialization);
    name_ok && spec_ok
}

/// Keep the records satisfying [`matches_filters`], preserving order.
#[must_use]
pub fn filter_records(records: &[ProviderRecord], filters: &SearchFilters) -> Vec<ProviderRecord> {
    records
        .iter()
        .filter(|r| matches_filters(r, filters))
        .cloned()
        .collect()
}

/// The fixed placeholder set presented when every network tier fails.
///
/// Identifiers are well-known (1, 2, 3); nothing else in the system creates
/// records locally.
#[must_use]
pub fn synthetic_providers() -> Vec<ProviderRecord> {
    vec![
        ProviderRecord {
            id: 1,
            name: "Dr. Sophia Chen".to_string(),
            specialization: "Cardiologist".to_string(),
            clinic_name: "HealthPlus Clinic".to_string(),
            city: "Toronto".to_string(),
            country: "Canada".to_string(),
            rating: Some(4.8),
        },
        ProviderRecord {
            id: 2,
            name: "Dr. Alejandro Rivera".to_string(),
            specialization: "Orthodontist".to_string(),
            clinic_name: "SmileBright Dental".to_string(),
            city: "Mexico City".to_string(),
            country: "Mexico".to_string(),
            rating: Some(4.6),
        },
        ProviderRecord {
            id: 3,
            name: "Dr. Emma Johansson".to_string(),
            specialization: "Dermatologist".to_string(),
            clinic_name: "SkinCare Center".to_string(),
            city: "Stockholm".to_string(),
            country: "Sweden".to_string(),
            rating: Some(4.9),
        },
    ]
}

/// What: Fetch the full provider set through the ordered tier chain.
///
/// Inputs:
/// - `api`: Directory endpoints to query
///
/// Output:
/// - `Ok(records)` from the first tier that yields a non-empty set, or the
///   last tier's (possibly empty) successful response; `Err` when every tier
///   fails with a transport error.
///
/// Details:
/// - An empty response from a non-final tier advances the chain; it is a
///   soft miss, not a failure.
async fn fetch_unfiltered<A: DirectoryApi>(api: &A) -> ApiResult<Vec<ProviderRecord>> {
    let mut last_err = None;
    for (i, tier) in FULL_SET_TIERS.iter().enumerate() {
        let is_last = i + 1 == FULL_SET_TIERS.len();
        let attempt = match tier {
            FullSetTier::Primary => api.fetch_all().await,
            FullSetTier::ListAll => api.fetch_all_fallback().await,
        };
        match attempt {
            Ok(records) if !records.is_empty() || is_last => {
                tracing::debug!(tier = ?tier, count = records.len(), "[Retrieve] full set tier succeeded");
                return Ok(records);
            }
            Ok(_) => {
                tracing::debug!(tier = ?tier, "[Retrieve] tier returned an empty set, trying next");
            }
            Err(e) => {
                tracing::warn!(tier = ?tier, error = %e, "[Retrieve] tier failed");
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| "no full-set tier produced a result".into()))
}

/// Build the synthetic-tier outcome for the given filters.
fn synthetic_outcome(filters: &SearchFilters) -> SearchOutcome {
    let set = synthetic_providers();
    tracing::info!(
        count = set.len(),
        "[Retrieve] all network tiers failed; using placeholder providers"
    );
    SearchOutcome {
        snapshot: ListingSnapshot::new(filter_records(&set, filters), filters.clone()),
        full_set: Some(set),
    }
}

/// What: Retrieve a listing snapshot for a user search action.
///
/// Inputs:
/// - `api`: Directory endpoints to query
/// - `filters`: Current search filters
///
/// Output:
/// - A snapshot that always satisfies the filter predicate; never an error.
///   Transport failure at any tier terminates in the synthetic placeholder
///   set, filtered with the same predicate.
///
/// Details:
/// - `full_set` carries the unfiltered record set consumed by the
///   full-set and synthetic cases so the caller can refresh the
///   cross-session cache; server-filtered results leave it `None`.
pub async fn retrieve<A: DirectoryApi>(api: &A, filters: &SearchFilters) -> SearchOutcome {
    match classify(filters) {
        FilterCase::Unfiltered => match fetch_unfiltered(api).await {
            Ok(set) => SearchOutcome {
                snapshot: ListingSnapshot::new(set.clone(), filters.clone()),
                full_set: Some(set),
            },
            Err(_) => synthetic_outcome(filters),
        },
        FilterCase::BySpecialization => {
            match api.fetch_by_specialization(&filters.specialization).await {
                Ok(set) => SearchOutcome {
                    snapshot: ListingSnapshot::new(set, filters.clone()),
                    full_set: None,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "[Retrieve] specialization search failed");
                    synthetic_outcome(filters)
                }
            }
        }
        FilterCase::ByName => match api.search_by_name(filters.query_text.trim()).await {
            Ok(set) => SearchOutcome {
                snapshot: ListingSnapshot::new(set, filters.clone()),
                full_set: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "[Retrieve] name search failed");
                synthetic_outcome(filters)
            }
        },
        FilterCase::Combined => match fetch_unfiltered(api).await {
            Ok(set) => SearchOutcome {
                snapshot: ListingSnapshot::new(filter_records(&set, filters), filters.clone()),
                full_set: Some(set),
            },
            Err(_) => synthetic_outcome(filters),
        },
    }
}

/// What: Perform the cold-start unfiltered load.
///
/// Inputs:
/// - `api`: Directory endpoints to query
///
/// Output:
/// - The full set on success; an empty snapshot (and no cache payload) when
///   every network tier fails. The empty listing is the surfaced state, not
///   an error.
pub async fn initial_load<A: DirectoryApi>(api: &A) -> SearchOutcome {
    match fetch_unfiltered(api).await {
        Ok(set) => SearchOutcome {
            snapshot: ListingSnapshot::new(set.clone(), SearchFilters::default()),
            full_set: Some(set),
        },
        Err(e) => {
            tracing::warn!(error = %e, "[Retrieve] initial load failed; presenting empty listing");
            SearchOutcome {
                snapshot: ListingSnapshot::default(),
                full_set: None,
            }
        }
    }
}

/// Run one worker request under its failure policy.
pub async fn execute<A: DirectoryApi>(
    api: &A,
    filters: &SearchFilters,
    kind: RequestKind,
) -> SearchOutcome {
    match kind {
        RequestKind::Search => retrieve(api, filters).await,
        RequestKind::InitialLoad => initial_load(api).await,
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use super::{filter_records, initial_load, retrieve, synthetic_providers};
    use crate::api::{ApiResult, DirectoryApi};
    use crate::state::{ProviderRecord, SearchFilters};

    fn record(id: u64, name: &str, spec: &str) -> ProviderRecord {
        ProviderRecord {
            id,
            name: name.to_string(),
            specialization: spec.to_string(),
            clinic_name: String::new(),
            city: String::new(),
            country: String::new(),
            rating: None,
        }
    }

    fn filters(query: &str, spec: &str) -> SearchFilters {
        SearchFilters {
            query_text: query.to_string(),
            specialization: spec.to_string(),
        }
    }

    /// In-memory directory endpoints with a call log. `None` responses model
    /// transport failure.
    #[derive(Default)]
    struct StubApi {
        primary: Option<Vec<ProviderRecord>>,
        fallback: Option<Vec<ProviderRecord>>,
        by_spec: Option<Vec<ProviderRecord>>,
        by_name: Option<Vec<ProviderRecord>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubApi {
        fn log(&self, call: String) {
            self.calls.lock().expect("calls lock").push(call);
        }

        fn respond(data: Option<Vec<ProviderRecord>>) -> ApiResult<Vec<ProviderRecord>> {
            data.ok_or_else(|| "connection refused".into())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    impl DirectoryApi for StubApi {
        fn fetch_all(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
            self.log("providers".to_string());
            let data = self.primary.clone();
            async move { Self::respond(data) }
        }

        fn fetch_all_fallback(
            &self,
        ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
            self.log("providers/all".to_string());
            let data = self.fallback.clone();
            async move { Self::respond(data) }
        }

        fn fetch_by_specialization(
            &self,
            value: &str,
        ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
            self.log(format!("specialization:{value}"));
            let data = self.by_spec.clone();
            async move { Self::respond(data) }
        }

        fn search_by_name(
            &self,
            text: &str,
        ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
            self.log(format!("search:{text}"));
            let data = self.by_name.clone();
            async move { Self::respond(data) }
        }

        fn fetch_by_id(&self, id: u64) -> impl Future<Output = ApiResult<ProviderRecord>> + Send {
            self.log(format!("detail:{id}"));
            async move { Err("not wired in this stub".into()) }
        }
    }

    #[tokio::test]
    /// What: Specialization-only search calls exactly the category endpoint
    ///
    /// - Input: Filters with specialization "Cardiologist" and empty query
    /// - Output: One `specialization:Cardiologist` call; records pass through;
    ///   no cache payload
    async fn specialization_search_uses_category_endpoint() {
        let api = StubApi {
            by_spec: Some(vec![record(1, "Dr. Sophia Chen", "Cardiologist")]),
            ..Default::default()
        };
        let out = retrieve(&api, &filters("", "Cardiologist")).await;
        assert_eq!(api.calls(), vec!["specialization:Cardiologist".to_string()]);
        assert!(
            out.snapshot
                .records
                .iter()
                .all(|r| r.specialization == "Cardiologist")
        );
        assert!(out.full_set.is_none());
    }

    #[tokio::test]
    /// What: Name-only search calls exactly the search endpoint with trimmed text
    ///
    /// - Input: Query text " Rivera " and empty specialization
    /// - Output: One `search:Rivera` call; no cache payload
    async fn name_search_uses_search_endpoint() {
        let api = StubApi {
            by_name: Some(vec![record(2, "Dr. Alejandro Rivera", "Orthodontist")]),
            ..Default::default()
        };
        let out = retrieve(&api, &filters(" Rivera ", "")).await;
        assert_eq!(api.calls(), vec!["search:Rivera".to_string()]);
        assert_eq!(out.snapshot.records.len(), 1);
        assert!(out.full_set.is_none());
    }

    #[tokio::test]
    /// What: Combined filters fetch once and filter client-side on both fields
    ///
    /// - Input: specialization "Dentist", query "Rivera"; full set mixing a
    ///   name match with the wrong specialization
    /// - Output: Only the dentist named Rivera survives; the unfiltered set is
    ///   the cache payload; a single unfiltered call
    async fn combined_filters_are_applied_client_side() {
        let full = vec![
            record(2, "Dr. Alejandro Rivera", "Orthodontist"),
            record(4, "Dr. Maria Rivera", "Dentist"),
            record(5, "Dr. Emma Johansson", "Dermatologist"),
        ];
        let api = StubApi {
            primary: Some(full.clone()),
            ..Default::default()
        };
        let out = retrieve(&api, &filters("Rivera", "Dentist")).await;
        assert_eq!(api.calls(), vec!["providers".to_string()]);
        assert_eq!(out.snapshot.records.len(), 1);
        assert_eq!(out.snapshot.records[0].id, 4);
        assert_eq!(out.full_set, Some(full));
    }

    #[tokio::test]
    /// What: Empty primary response retries the list-all endpoint
    ///
    /// - Input: Primary returns `[]`; fallback returns two records
    /// - Output: Resolved set equals the fallback's result, not `[]`
    async fn empty_primary_falls_back_to_list_all() {
        let fallback_set = vec![
            record(1, "Dr. Sophia Chen", "Cardiologist"),
            record(3, "Dr. Emma Johansson", "Dermatologist"),
        ];
        let api = StubApi {
            primary: Some(Vec::new()),
            fallback: Some(fallback_set.clone()),
            ..Default::default()
        };
        let out = retrieve(&api, &SearchFilters::default()).await;
        assert_eq!(
            api.calls(),
            vec!["providers".to_string(), "providers/all".to_string()]
        );
        assert_eq!(out.snapshot.records, fallback_set);
    }

    #[tokio::test]
    /// What: Both full-set endpoints failing yields the fixed placeholder set
    ///
    /// - Input: Primary and fallback transport failures, no filters
    /// - Output: Exactly the three synthetic records, also cached
    async fn total_failure_yields_synthetic_set() {
        let api = StubApi::default();
        let out = retrieve(&api, &SearchFilters::default()).await;
        assert_eq!(out.snapshot.records, synthetic_providers());
        assert_eq!(out.full_set, Some(synthetic_providers()));
    }

    #[tokio::test]
    /// What: Synthetic fallback is filtered with the combined predicate
    ///
    /// - Input: Failing specialization endpoint, filter "Cardiologist"
    /// - Output: Only the synthetic cardiologist remains
    async fn synthetic_fallback_respects_filters() {
        let api = StubApi::default();
        let out = retrieve(&api, &filters("", "Cardiologist")).await;
        assert_eq!(out.snapshot.records.len(), 1);
        assert_eq!(out.snapshot.records[0].name, "Dr. Sophia Chen");
    }

    #[tokio::test]
    /// What: Cold-start load failure surfaces an empty listing, not placeholders
    ///
    /// - Input: Both full-set endpoints failing
    /// - Output: Empty snapshot and no cache payload
    async fn initial_load_failure_is_empty() {
        let api = StubApi::default();
        let out = initial_load(&api).await;
        assert!(out.snapshot.is_empty());
        assert!(out.full_set.is_none());
    }

    #[test]
    /// What: Combined predicate is case-insensitive on both fields
    ///
    /// - Input: Mixed-case query and specialization against a matching record
    /// - Output: Record kept; mismatched specialization excluded
    fn filter_predicate_case_insensitivity() {
        let set = vec![
            record(2, "Dr. Alejandro Rivera", "Orthodontist"),
            record(4, "Dr. Maria RIVERA", "dentist"),
        ];
        let kept = filter_records(&set, &filters("rivera", "Dentist"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 4);
    }
}
