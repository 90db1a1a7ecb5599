//! Application state: value types and the central mutable [`AppState`].

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    ActiveView, DetailResponse, ListingSnapshot, ProviderRecord, RequestKind, SPECIALIZATIONS,
    SearchFilters, SearchOutcome, SearchRequest, SearchResponse,
};
