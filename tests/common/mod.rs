//! Shared fixtures for docsea integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::sync::Mutex;

use docsea::api::{ApiResult, DirectoryApi};
use docsea::state::{ProviderRecord, SearchFilters};

/// Build a minimal provider record.
pub fn record(id: u64, name: &str, spec: &str) -> ProviderRecord {
    ProviderRecord {
        id,
        name: name.to_string(),
        specialization: spec.to_string(),
        clinic_name: format!("Clinic {id}"),
        city: "Toronto".to_string(),
        country: "Canada".to_string(),
        rating: None,
    }
}

/// Build filters from plain strings.
pub fn filters(query: &str, spec: &str) -> SearchFilters {
    SearchFilters {
        query_text: query.to_string(),
        specialization: spec.to_string(),
    }
}

/// In-memory directory endpoints with a call log.
///
/// A `None` response models a transport failure for that endpoint.
#[derive(Default)]
pub struct MockApi {
    pub primary: Option<Vec<ProviderRecord>>,
    pub fallback: Option<Vec<ProviderRecord>>,
    pub by_spec: Option<Vec<ProviderRecord>>,
    pub by_name: Option<Vec<ProviderRecord>>,
    pub by_id: Option<ProviderRecord>,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    /// API whose primary endpoint answers with `records`.
    pub fn with_primary(records: Vec<ProviderRecord>) -> Self {
        Self {
            primary: Some(records),
            ..Default::default()
        }
    }

    /// API where every endpoint fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Endpoint calls seen so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn respond(data: Option<Vec<ProviderRecord>>) -> ApiResult<Vec<ProviderRecord>> {
        data.ok_or_else(|| "connection refused".into())
    }
}

impl DirectoryApi for MockApi {
    fn fetch_all(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
        self.log("providers".to_string());
        let data = self.primary.clone();
        async move { Self::respond(data) }
    }

    fn fetch_all_fallback(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
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
        let data = self.by_id.clone();
        async move { data.ok_or_else(|| "connection refused".into()) }
    }
}
