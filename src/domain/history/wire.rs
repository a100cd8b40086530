//! Wire types for the aggregator history endpoints.

use crate::domain::token::wire::TokenInfoResponse;
use crate::shared::serde_util::{string_or_number, timestamp_ms};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query for `GET /history/v6.0/{chain}/history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryQuery {
    pub address: String,
    pub page: u32,
    pub limit: u32,
}

impl HistoryQuery {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            page: 1,
            limit: 100,
        }
    }
}

/// One entry of the history response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemResponse {
    pub id: String,
    pub hash: String,
    #[serde(default)]
    pub block_number: u64,
    #[serde(with = "timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    /// Native value, raw.
    #[serde(with = "string_or_number")]
    pub value: String,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(with = "string_or_number")]
    pub gas_price: String,
    pub status: String,
    #[serde(default)]
    pub token_in: Option<TokenInfoResponse>,
    #[serde(default)]
    pub token_out: Option<TokenInfoResponse>,
    #[serde(default)]
    pub amount_in: Option<String>,
    #[serde(default)]
    pub amount_out: Option<String>,
}

/// `GET /history/v6.0/{chain}/history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HistoryResponse {
    #[serde(default)]
    pub items: Vec<HistoryItemResponse>,
}
