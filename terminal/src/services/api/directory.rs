//! # Handle Directory Endpoint
//!
//! `POST /resolve` maps an `@handle` to an address.

use alloy_primitives::Address;
use shared::{ResolveRequest, ResolveResponse};

use super::client::ApiClient;
use crate::utils::validation::parse_address;

/// Resolve a handle through the backend.
///
/// Non-success statuses, a `null` address and addresses that fail the format
/// check all mean "not found". Only transport and body-parse failures are errors.
#[tracing::instrument(skip(client), fields(handle = %handle))]
pub async fn resolve_handle(client: &ApiClient, handle: &str) -> Result<Option<Address>, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/resolve", client.base_url()))
        .json(&ResolveRequest {
            handle: handle.to_string(),
        })
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Resolve network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "Handle not resolved");
        return Ok(None);
    }

    let body = response
        .json::<ResolveResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let address = body.address.as_deref().and_then(parse_address);
    tracing::debug!(
        found = address.is_some(),
        duration_ms = start.elapsed().as_millis(),
        "Handle lookup finished"
    );
    Ok(address)
}
