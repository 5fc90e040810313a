use serde::{Deserialize, Serialize};

/// Handle lookup request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveRequest {
    pub handle: String,
}

/// Handle lookup response. `address` is `null` when the handle is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveResponse {
    pub address: Option<String>,
}
