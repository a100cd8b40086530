//! Conversion: aggregator token wire types → `Token`.

use super::wire::{TokenInfoResponse, TokensResponse};
use super::{Token, EVM_NATIVE_ADDRESS};
use crate::shared::ChainId;

/// Aggregator placeholder for the chain's gas token.
const EVM_NATIVE_PLACEHOLDER: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

impl Token {
    pub fn from_wire(source: TokenInfoResponse, chain_id: ChainId) -> Self {
        let is_native = source.address.eq_ignore_ascii_case(EVM_NATIVE_PLACEHOLDER)
            || source.address == EVM_NATIVE_ADDRESS
            || source.tags.iter().any(|t| t == "native");
        Token {
            address: source.address,
            symbol: source.symbol,
            name: source.name,
            decimals: source.decimals,
            chain_id,
            is_native,
            logo_uri: source.logo_uri,
        }
    }
}

/// Flatten a token map into a list sorted by symbol.
pub(crate) fn tokens_from_response(resp: TokensResponse, chain_id: ChainId) -> Vec<Token> {
    let mut tokens: Vec<Token> = resp
        .tokens
        .into_values()
        .map(|t| Token::from_wire(t, chain_id))
        .collect();
    tokens.sort_by(|a, b| {
        a.symbol
            .to_ascii_lowercase()
            .cmp(&b.symbol.to_ascii_lowercase())
            .then_with(|| a.address.cmp(&b.address))
    });
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_from_response() {
        let json = r#"{
            "tokens": {
                "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee": {
                    "address": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
                    "symbol": "ETH",
                    "name": "Ether",
                    "decimals": 18,
                    "logoURI": "https://tokens.1inch.io/eth.png",
                    "tags": ["native", "PEG:ETH"]
                },
                "0xdac17f958d2ee523a2206206994597c13d831ec7": {
                    "address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                    "symbol": "USDT",
                    "name": "Tether USD",
                    "decimals": 6
                }
            }
        }"#;
        let resp: TokensResponse = serde_json::from_str(json).unwrap();
        let tokens = tokens_from_response(resp, ChainId::ETHEREUM);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].symbol, "ETH");
        assert!(tokens[0].is_native);
        assert_eq!(
            tokens[0].logo_uri.as_deref(),
            Some("https://tokens.1inch.io/eth.png")
        );
        assert_eq!(tokens[1].symbol, "USDT");
        assert!(!tokens[1].is_native);
        assert_eq!(tokens[1].chain_id, ChainId::ETHEREUM);
    }
}
