//! Wire types for Horizon ledger responses.

use crate::shared::serde_util::string_or_number;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Pagination envelope ─────────────────────────────────────────────────────

/// Horizon collection page: `{"_embedded": {"records": [...]}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedded<T> {
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn into_records(self) -> Vec<T> {
        self.embedded.records
    }
}

// ─── Assets ──────────────────────────────────────────────────────────────────

/// Asset triple as Horizon renders it inside other objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssetResponse {
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

// ─── Orderbook ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookLevelResponse {
    pub price: Decimal,
    pub amount: Decimal,
}

/// `GET /order_book`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookResponse {
    pub bids: Vec<OrderbookLevelResponse>,
    pub asks: Vec<OrderbookLevelResponse>,
    pub base: AssetResponse,
    pub counter: AssetResponse,
}

/// Query for `GET /order_book`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct OrderbookQuery {
    pub selling_asset_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_asset_issuer: Option<String>,
    pub buying_asset_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buying_asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buying_asset_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ─── Path finding ────────────────────────────────────────────────────────────

/// Query for `GET /paths/strict-send`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct StrictSendPathsQuery {
    pub source_asset_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_asset_issuer: Option<String>,
    pub source_amount: String,
    /// Comma-separated `native` / `CODE:ISSUER` list.
    pub destination_assets: String,
}

/// One record of a path-finding response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathRecord {
    pub source_asset_type: String,
    #[serde(default)]
    pub source_asset_code: Option<String>,
    #[serde(default)]
    pub source_asset_issuer: Option<String>,
    pub source_amount: Decimal,
    pub destination_asset_type: String,
    #[serde(default)]
    pub destination_asset_code: Option<String>,
    #[serde(default)]
    pub destination_asset_issuer: Option<String>,
    pub destination_amount: Decimal,
    #[serde(default)]
    pub path: Vec<AssetResponse>,
}

// ─── Ledgers / transactions ──────────────────────────────────────────────────

/// One record of `GET /ledgers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerRecord {
    pub sequence: u32,
    pub closed_at: DateTime<Utc>,
    pub protocol_version: u32,
    pub base_fee_in_stroops: u32,
    pub base_reserve_in_stroops: u32,
    #[serde(default)]
    pub successful_transaction_count: u32,
    #[serde(default)]
    pub failed_transaction_count: u32,
}

/// `GET /transactions/{hash}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionResponse {
    pub id: String,
    pub hash: String,
    pub successful: bool,
    pub ledger: u32,
    pub created_at: DateTime<Utc>,
    pub source_account: String,
    #[serde(with = "string_or_number")]
    pub fee_charged: String,
    #[serde(default)]
    pub operation_count: u32,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Friendbot funding reply (the funding transaction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendbotResponse {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub successful: Option<bool>,
}
