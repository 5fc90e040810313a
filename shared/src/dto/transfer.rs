use serde::{Deserialize, Serialize};

/// Chain id used by the backend when a log entry does not carry one (Base mainnet).
pub const DEFAULT_CHAIN_ID: u64 = 8453;

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

/// Completed transfer, recorded by the backend for the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferLogRequest {
    pub hash: String,
    pub from_addr: String,
    pub to: String,
    /// Token symbol, e.g. "CIK" or "ETH"
    pub token: String,
    /// Human-readable amount as typed by the user
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferLogResponse {
    pub ok: bool,
}

/// One row of `GET /activity`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityItem {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub token: String,
    pub amount: String,
    /// Unix timestamp (seconds)
    pub ts: i64,
}

impl ActivityItem {
    /// Timestamp as a UTC date, `None` when out of range.
    pub fn timestamp(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_request_omits_missing_memo() {
        let req = TransferLogRequest {
            hash: "0xabc".to_string(),
            from_addr: "0x01".to_string(),
            to: "0x02".to_string(),
            token: "CIK".to_string(),
            amount: "1.5".to_string(),
            memo: None,
            chain_id: DEFAULT_CHAIN_ID,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("memo").is_none());
        assert_eq!(json["chain_id"], 8453);
    }

    #[test]
    fn test_log_request_defaults_chain_id() {
        let req: TransferLogRequest = serde_json::from_str(
            r#"{"hash":"0xabc","from_addr":"0x01","to":"0x02","token":"ETH","amount":"2"}"#,
        )
        .unwrap();
        assert_eq!(req.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(req.memo, None);
    }

    #[test]
    fn test_activity_timestamp() {
        let item = ActivityItem {
            hash: "0xabc".to_string(),
            from: "0x01".to_string(),
            to: "0x02".to_string(),
            token: "CIK".to_string(),
            amount: "100.5".to_string(),
            ts: 1_700_000_000,
        };
        assert_eq!(item.timestamp().unwrap().timestamp(), 1_700_000_000);
    }
}
