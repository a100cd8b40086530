//! Wire types for Horizon account responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ThresholdsResponse {
    pub low_threshold: u8,
    pub med_threshold: u8,
    pub high_threshold: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FlagsResponse {
    pub auth_required: bool,
    pub auth_revocable: bool,
    pub auth_immutable: bool,
    #[serde(default)]
    pub auth_clawback_enabled: bool,
}

/// One entry of an account's `balances`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    pub balance: Decimal,
    pub asset_type: String,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_issuer: Option<String>,
    #[serde(default)]
    pub liquidity_pool_id: Option<String>,
    #[serde(default)]
    pub limit: Option<Decimal>,
    #[serde(default)]
    pub buying_liabilities: Option<Decimal>,
    #[serde(default)]
    pub selling_liabilities: Option<Decimal>,
}

/// `GET /accounts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountResponse {
    pub account_id: String,
    /// Sequence number, a 64-bit integer rendered as a string.
    pub sequence: String,
    pub subentry_count: u32,
    pub thresholds: ThresholdsResponse,
    pub flags: FlagsResponse,
    pub balances: Vec<BalanceResponse>,
    #[serde(default)]
    pub last_modified_time: Option<chrono::DateTime<chrono::Utc>>,
}
