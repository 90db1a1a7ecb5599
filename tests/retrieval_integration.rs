//! End-to-end retrieval flows through the search worker and controller.

mod common;

use std::sync::Arc;

use tokio::sync::mpsc;

use common::{MockApi, filters, record};
use docsea::app::workers::spawn_search_worker;
use docsea::cache::{CrossSessionCache, MemoryCache};
use docsea::controller::ViewController;
use docsea::retrieval::synthetic_providers;
use docsea::session::SessionStore;
use docsea::state::{RequestKind, SearchRequest, SearchResponse};

fn controller() -> ViewController<MemoryCache, SessionStore> {
    ViewController::new(MemoryCache::default(), SessionStore::default())
}

/// Run one request through a worker over `api` and return the response.
async fn round_trip(api: MockApi, request: SearchRequest) -> SearchResponse {
    let api = Arc::new(api);
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    spawn_search_worker(Arc::clone(&api), query_rx, result_tx);
    query_tx.send(request).expect("request accepted");
    result_rx.recv().await.expect("worker responds")
}

#[tokio::test]
/// What: An unfiltered search resolves through the worker and feeds the cache
///
/// - Input: Working primary endpoint with two records
/// - Output: Listing shows both records; cross-session cache holds the set
async fn unfiltered_search_populates_listing_and_cache() {
    let set = vec![
        record(1, "Dr. Sophia Chen", "Cardiologist"),
        record(3, "Dr. Emma Johansson", "Dermatologist"),
    ];
    let mut ctl = controller();
    let request = ctl.begin_search(RequestKind::Search);
    let response = round_trip(MockApi::with_primary(set.clone()), request).await;
    ctl.apply_search(response);
    assert_eq!(ctl.state.records, set);
    assert_eq!(ctl.cache().load(), Some(set));
    assert!(!ctl.state.loading);
}

#[tokio::test]
/// What: Fallback law — an empty primary resolves to the secondary's result
///
/// - Input: Primary answering `[]`, secondary answering one record
/// - Output: Listing equals the secondary set; both endpoints were called in
///   order
async fn empty_primary_resolves_to_secondary_result() {
    let secondary = vec![record(5, "Dr. Priya Patel", "Pediatrician")];
    let api = MockApi {
        primary: Some(Vec::new()),
        fallback: Some(secondary.clone()),
        ..Default::default()
    };
    let api = Arc::new(api);
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    spawn_search_worker(Arc::clone(&api), query_rx, result_tx);

    let mut ctl = controller();
    query_tx
        .send(ctl.begin_search(RequestKind::Search))
        .expect("request accepted");
    let response = result_rx.recv().await.expect("worker responds");
    ctl.apply_search(response);

    assert_eq!(ctl.state.records, secondary);
    assert_eq!(
        api.calls(),
        vec!["providers".to_string(), "providers/all".to_string()]
    );
}

#[tokio::test]
/// What: Total network failure on a search presents the synthetic set
///
/// - Input: Every endpoint failing, no filters
/// - Output: Listing equals the fixed three-entry placeholder set and the
///   cache holds it as the bootstrap set
async fn total_failure_presents_synthetic_set() {
    let mut ctl = controller();
    let request = ctl.begin_search(RequestKind::Search);
    let response = round_trip(MockApi::failing(), request).await;
    ctl.apply_search(response);
    assert_eq!(ctl.state.records, synthetic_providers());
    assert_eq!(ctl.cache().load(), Some(synthetic_providers()));
}

#[tokio::test]
/// What: Synthetic fallback still honors the active filters
///
/// - Input: Every endpoint failing; specialization filter "Cardiologist"
/// - Output: Only the synthetic cardiologist is listed
async fn synthetic_fallback_is_filtered() {
    let mut ctl = controller();
    ctl.set_specialization("Cardiologist");
    let request = ctl.begin_search(RequestKind::Search);
    assert_eq!(request.filters, filters("", "Cardiologist"));
    let response = round_trip(MockApi::failing(), request).await;
    ctl.apply_search(response);
    assert_eq!(ctl.state.records.len(), 1);
    assert_eq!(ctl.state.records[0].name, "Dr. Sophia Chen");
}

#[tokio::test]
/// What: Combined filters fetch once and filter on both fields
///
/// - Input: specialization "Dentist", query "Rivera"; the full set contains a
///   name match with the wrong specialization
/// - Output: One unfiltered call; the orthodontist Rivera is excluded
async fn combined_search_excludes_specialization_mismatch() {
    let full = vec![
        record(2, "Dr. Alejandro Rivera", "Orthodontist"),
        record(4, "Dr. Maria Rivera", "Dentist"),
    ];
    let api = Arc::new(MockApi::with_primary(full));
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    spawn_search_worker(Arc::clone(&api), query_rx, result_tx);

    let mut ctl = controller();
    ctl.set_query_text("Rivera");
    ctl.set_specialization("Dentist");
    query_tx
        .send(ctl.begin_search(RequestKind::Search))
        .expect("request accepted");
    let response = result_rx.recv().await.expect("worker responds");
    ctl.apply_search(response);

    assert_eq!(api.calls(), vec!["providers".to_string()]);
    assert_eq!(ctl.state.records.len(), 1);
    assert_eq!(ctl.state.records[0].id, 4);
}

#[tokio::test]
/// What: Cold-start load failure surfaces the empty-results view
///
/// - Input: Every endpoint failing; an `InitialLoad` request
/// - Output: Empty listing, loading cleared, cache untouched
async fn initial_load_failure_presents_empty_listing() {
    let mut ctl = controller();
    let request = ctl.begin_search(RequestKind::InitialLoad);
    let response = round_trip(MockApi::failing(), request).await;
    ctl.apply_search(response);
    assert!(ctl.state.records.is_empty());
    assert!(!ctl.state.loading);
    assert!(ctl.cache().load().is_none());
}
