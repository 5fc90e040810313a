//! # API Client
//!
//! HTTP client for the CIK backend (handle directory and transfer log).

use std::time::Duration;

use alloy_primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use shared::TransferLogRequest;

use crate::core::service::{HandleDirectory, TransferLogService};

/// Header carrying the static API key on authenticated endpoints.
pub(crate) const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client for communicating with the backend API server.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a new API client for `base_url`.
    ///
    /// The client is configured with a 10 second timeout so a stalled backend
    /// cannot hold up the terminal.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[async_trait]
impl HandleDirectory for ApiClient {
    async fn resolve(&self, handle: &str) -> Result<Option<Address>, String> {
        super::directory::resolve_handle(self, handle).await
    }
}

#[async_trait]
impl TransferLogService for ApiClient {
    async fn log_transfer(&self, entry: TransferLogRequest) -> Result<(), String> {
        super::transfers::log_transfer(self, &entry).await
    }
}
