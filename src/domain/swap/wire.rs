//! Wire types for the aggregator swap, approval and Fusion+ swap endpoints.

use crate::shared::serde_util::string_or_number;
use crate::shared::ChainId;
use serde::{Deserialize, Serialize};

// ─── Swap ────────────────────────────────────────────────────────────────────

/// Query for `GET /swap/v6.0/{chain}/swap`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SwapParams {
    pub src: String,
    pub dst: String,
    /// Raw integer amount of `src`.
    pub amount: String,
    /// Wallet that sends the transaction.
    pub from: String,
    /// Percent, e.g. `0.5`.
    pub slippage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_tokens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_partial_fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_estimate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_patching: Option<bool>,
}

/// Unsigned EVM transaction returned by the swap and approve endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapTx {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(with = "string_or_number")]
    pub value: String,
    #[serde(with = "string_or_number")]
    pub gas_price: String,
    #[serde(default)]
    pub gas: u64,
}

/// `GET /swap/v6.0/{chain}/swap` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    #[serde(with = "string_or_number")]
    pub dst_amount: String,
    pub tx: SwapTx,
    #[serde(default)]
    pub protocols: Option<serde_json::Value>,
}

// ─── Approvals ───────────────────────────────────────────────────────────────

/// `GET /swap/v6.0/{chain}/approve/spender`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpenderResponse {
    pub address: String,
}

/// Query for `GET /swap/v6.0/{chain}/approve/transaction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveTransactionQuery {
    pub token_address: String,
    /// Raw amount; omitted means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// `GET /swap/v6.0/{chain}/approve/transaction` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveTransactionResponse {
    pub data: String,
    #[serde(with = "string_or_number")]
    pub gas_price: String,
    pub to: String,
    #[serde(with = "string_or_number")]
    pub value: String,
}

/// Query for `GET /swap/v6.0/{chain}/approve/allowance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceQuery {
    pub token_address: String,
    pub wallet_address: String,
}

/// `GET /swap/v6.0/{chain}/approve/allowance` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllowanceResponse {
    /// Raw integer; may exceed 128 bits for unlimited approvals.
    #[serde(with = "string_or_number")]
    pub allowance: String,
}

// ─── Liquidity sources ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiquiditySource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub img: Option<String>,
}

/// `GET /swap/v6.0/{chain}/liquidity-sources`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiquiditySourcesResponse {
    pub protocols: Vec<LiquiditySource>,
}

// ─── Fusion+ swap ────────────────────────────────────────────────────────────

/// Body of `POST /fusion-plus/swap`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FusionSwapRequest {
    pub src: String,
    pub dst: String,
    pub amount: String,
    pub from_chain_id: ChainId,
    pub to_chain_id: ChainId,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
}
