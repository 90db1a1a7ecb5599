//! HTTP client for the remote provider directory API.
//!
//! The retrieval layer talks to the directory through the [`DirectoryApi`]
//! trait so tests can substitute an in-memory fake; [`HttpDirectoryApi`] is
//! the production implementation over the REST endpoints.

use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use crate::state::ProviderRecord;
use crate::util::percent_encode;

/// Boxed error for transport and decode failures.
pub type ApiError = Box<dyn std::error::Error + Send + Sync>;
/// Result alias for API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Remote provider directory endpoints.
///
/// Every method maps to one REST call; a non-2xx status or transport failure
/// surfaces as `Err`, which the retrieval layer treats as a tier failure.
pub trait DirectoryApi: Send + Sync {
    /// `GET /providers` — the full unfiltered set.
    fn fetch_all(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send;
    /// `GET /providers/all` — secondary full-set endpoint.
    fn fetch_all_fallback(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send;
    /// `GET /providers/specialization/{value}` — server-side category filter.
    fn fetch_by_specialization(
        &self,
        value: &str,
    ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send;
    /// `GET /providers/search?name={text}` — server-side name substring match.
    fn search_by_name(
        &self,
        text: &str,
    ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send;
    /// `GET /providers/{id}` — one record for the detail screen.
    fn fetch_by_id(&self, id: u64) -> impl Future<Output = ApiResult<ProviderRecord>> + Send;
}

/// Shared HTTP client with connection pooling for directory requests.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("docsea/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Production [`DirectoryApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpDirectoryApi {
    /// Base URL without a trailing slash, e.g. `http://localhost:8080/api`.
    base_url: String,
}

impl HttpDirectoryApi {
    /// Build a client for the given base URL (trailing slashes trimmed).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and decode a JSON array of provider records.
    async fn get_records(&self, url: String) -> ApiResult<Vec<ProviderRecord>> {
        tracing::debug!(url = %url, "[Api] requesting provider records");
        let resp = HTTP_CLIENT.get(url.as_str()).send().await?.error_for_status()?;
        let records: Vec<ProviderRecord> = resp.json().await?;
        tracing::debug!(url = %url, count = records.len(), "[Api] provider records received");
        Ok(records)
    }
}

impl DirectoryApi for HttpDirectoryApi {
    fn fetch_all(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
        self.get_records(format!("{}/providers", self.base_url))
    }

    fn fetch_all_fallback(&self) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
        self.get_records(format!("{}/providers/all", self.base_url))
    }

    fn fetch_by_specialization(
        &self,
        value: &str,
    ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
        self.get_records(format!(
            "{}/providers/specialization/{}",
            self.base_url,
            percent_encode(value)
        ))
    }

    fn search_by_name(
        &self,
        text: &str,
    ) -> impl Future<Output = ApiResult<Vec<ProviderRecord>>> + Send {
        self.get_records(format!(
            "{}/providers/search?name={}",
            self.base_url,
            percent_encode(text)
        ))
    }

    fn fetch_by_id(&self, id: u64) -> impl Future<Output = ApiResult<ProviderRecord>> + Send {
        let url = format!("{}/providers/{id}", self.base_url);
        async move {
            tracing::debug!(url = %url, "[Api] requesting provider detail");
            let resp = HTTP_CLIENT.get(url.as_str()).send().await?.error_for_status()?;
            Ok(resp.json::<ProviderRecord>().await?)
        }
    }
}
