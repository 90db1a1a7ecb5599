//! Background workers bridging the event loop and the directory API.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::DirectoryApi;
use crate::retrieval;
use crate::state::{DetailResponse, SearchRequest, SearchResponse};

/// Spawn the retrieval worker: one request in, one response out, in order.
///
/// Requests are not cancelled by newer ones; the event loop applies
/// responses in completion order and the controller decides what sticks.
pub fn spawn_search_worker<A: DirectoryApi + 'static>(
    api: Arc<A>,
    mut query_rx: mpsc::UnboundedReceiver<SearchRequest>,
    result_tx: mpsc::UnboundedSender<SearchResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = query_rx.recv().await {
            let outcome = retrieval::execute(api.as_ref(), &req.filters, req.kind).await;
            if result_tx
                .send(SearchResponse {
                    id: req.id,
                    outcome,
                })
                .is_err()
            {
                break;
            }
        }
    });
}

/// Spawn the detail worker resolving single records for the detail screen.
pub fn spawn_detail_worker<A: DirectoryApi + 'static>(
    api: Arc<A>,
    mut detail_rx: mpsc::UnboundedReceiver<u64>,
    result_tx: mpsc::UnboundedSender<DetailResponse>,
) {
    tokio::spawn(async move {
        while let Some(id) = detail_rx.recv().await {
            let record = match api.fetch_by_id(id).await {
                Ok(r) => Some(r),
                Err(e) => {
                    tracing::debug!(id, error = %e, "[Detail] fetch failed; keeping listing copy");
                    None
                }
            };
            if result_tx.send(DetailResponse { id, record }).is_err() {
                break;
            }
        }
    });
}
