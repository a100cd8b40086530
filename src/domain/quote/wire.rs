//! Wire types for the aggregator quote endpoints.

use crate::shared::serde_util::string_or_number;
use crate::shared::ChainId;
use serde::{Deserialize, Serialize};

// ─── Same-chain ──────────────────────────────────────────────────────────────

/// Query for `GET /swap/v6.0/{chain}/quote`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub src: String,
    pub dst: String,
    /// Raw integer amount of `src`.
    pub amount: String,
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
    pub main_route_parts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_gas: Option<bool>,
}

impl QuoteParams {
    pub fn new(src: &str, dst: &str, raw_amount: u128) -> Self {
        Self {
            src: src.to_string(),
            dst: dst.to_string(),
            amount: raw_amount.to_string(),
            include_gas: Some(true),
            ..Self::default()
        }
    }
}

/// `GET /swap/v6.0/{chain}/quote` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Raw integer amount of `dst`.
    #[serde(with = "string_or_number")]
    pub dst_amount: String,
    #[serde(default)]
    pub protocols: Option<serde_json::Value>,
    #[serde(default, alias = "gas")]
    pub estimated_gas: Option<u64>,
}

// ─── Cross-chain (Fusion+) ───────────────────────────────────────────────────

/// Body of `POST /fusion-plus/quote`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FusionQuoteRequest {
    pub src: String,
    pub dst: String,
    /// Raw integer amount of `src`.
    pub amount: String,
    pub from_chain_id: ChainId,
    pub to_chain_id: ChainId,
}

/// `POST /fusion-plus/quote` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FusionQuoteResponse {
    /// Raw integer amount of `dst`.
    #[serde(with = "string_or_number", alias = "dstTokenAmount")]
    pub dst_amount: String,
    #[serde(default)]
    pub quote_id: Option<String>,
    #[serde(default)]
    pub src_token_amount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_params_query_string() {
        let params = QuoteParams {
            complexity_level: Some(2),
            ..QuoteParams::new("0xaaa", "0xbbb", 1_000_000)
        };
        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "src=0xaaa&dst=0xbbb&amount=1000000&complexityLevel=2&includeGas=true"
        );
    }

    #[test]
    fn test_quote_response_gas_alias() {
        let resp: QuoteResponse =
            serde_json::from_str(r#"{"dstAmount": "2500000000000000", "gas": 180000}"#).unwrap();
        assert_eq!(resp.dst_amount, "2500000000000000");
        assert_eq!(resp.estimated_gas, Some(180000));
    }

    #[test]
    fn test_fusion_request_body() {
        let body = FusionQuoteRequest {
            src: "native".to_string(),
            dst: "0x0000000000000000000000000000000000000000".to_string(),
            amount: "1000000000".to_string(),
            from_chain_id: ChainId::NATIVE,
            to_chain_id: ChainId::ETHEREUM,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fromChainId"], 0);
        assert_eq!(json["toChainId"], 1);
        assert_eq!(json["amount"], "1000000000");
    }

    #[test]
    fn test_fusion_response_accepts_both_amount_keys() {
        let a: FusionQuoteResponse = serde_json::from_str(r#"{"dstAmount": "42"}"#).unwrap();
        let b: FusionQuoteResponse =
            serde_json::from_str(r#"{"dstTokenAmount": "42", "quoteId": "q-1"}"#).unwrap();
        assert_eq!(a.dst_amount, "42");
        assert_eq!(b.dst_amount, "42");
        assert_eq!(b.quote_id.as_deref(), Some("q-1"));
    }
}
