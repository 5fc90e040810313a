//! # Transfer Log Endpoints
//!
//! `POST /transfers` records a submitted transfer (API key required) and
//! `GET /activity` lists the most recent ones.

use shared::{ActivityItem, ErrorResponse, TransferLogRequest, TransferLogResponse};

use super::client::{ApiClient, API_KEY_HEADER};

/// Record a transfer. Any non-success status is an error.
#[tracing::instrument(skip(client, entry), fields(hash = %entry.hash, token = %entry.token))]
pub async fn log_transfer(client: &ApiClient, entry: &TransferLogRequest) -> Result<(), String> {
    let response = client
        .client
        .post(format!("{}/transfers", client.base_url()))
        .header(API_KEY_HEADER, client.api_key())
        .json(entry)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Transfer log rejected");
        return Err(match response.json::<ErrorResponse>().await {
            Ok(body) => format!("backend log failed: {} ({})", status, body.detail),
            Err(_) => format!("backend log failed: {}", status),
        });
    }

    let body = response
        .json::<TransferLogResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if body.ok {
        Ok(())
    } else {
        Err("backend log failed".to_string())
    }
}

/// Most recent logged transfers, newest first. Failures yield an empty list.
pub async fn fetch_activity(client: &ApiClient, limit: usize) -> Vec<ActivityItem> {
    let url = format!("{}/activity?limit={}", client.base_url(), limit);

    let response = match client.client.get(&url).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            tracing::warn!(status = response.status().as_u16(), "Activity request failed");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Activity network error");
            return Vec::new();
        }
    };

    response.json::<Vec<ActivityItem>>().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse activity");
        Vec::new()
    })
}
