use reqwest::{Client, StatusCode, Url};
use std::fmt;
use thiserror::Error;

use crate::store::model::ListDocumentsResponse;

pub mod model;

const STORE_API_BASE: &str = "https://firestore.googleapis.com/";

/// Why a fetch produced no documents. Callers substitute an empty feed for
/// any of these; the variant only matters for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store responded with {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(String),
    #[error("invalid listing URL: {0}")]
    Url(String),
}

/// Read-only client for the document store's public REST API. No
/// authentication is sent; the read path is public.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base_url: Url,
}

impl fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl StoreClient {
    pub fn new() -> Self {
        let base_url = Url::parse(STORE_API_BASE).expect("valid default store URL");
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: Url) -> Self {
        let http = Client::builder()
            .user_agent("outfit-feed/0.1")
            .no_proxy()
            .build()
            .expect("reqwest client");
        Self { http, base_url }
    }

    /// List every document in a collection with a single unpaginated GET.
    pub async fn list_documents(
        &self,
        project_id: &str,
        collection: &str,
    ) -> Result<ListDocumentsResponse, FetchError> {
        let path = format!(
            "v1/projects/{}/databases/(default)/documents/{}",
            project_id, collection
        );
        let url = self
            .base_url
            .join(&path)
            .map_err(|err| FetchError::Url(err.to_string()))?;

        let res = self.http.get(url).send().await?;
        if !res.status().is_success() {
            return Err(FetchError::Status(res.status()));
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|err| FetchError::Malformed(err.to_string()))
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new()
    }
}
