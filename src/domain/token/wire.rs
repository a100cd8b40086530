//! Wire types for the aggregator token endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of `GET /swap/v6.0/{chain}/tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenInfoResponse {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(default, rename = "logoURI")]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `GET /swap/v6.0/{chain}/tokens`: tokens keyed by address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensResponse {
    pub tokens: HashMap<String, TokenInfoResponse>,
}
