//! Built-in token list and the selector search filter.

use super::{Token, EVM_NATIVE_ADDRESS, STELLAR_NATIVE_ADDRESS};
use crate::shared::ChainId;

pub const USDC_STELLAR_ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
pub const USDT_STELLAR_ISSUER: &str = "GCQTGZQQ5G4PTM2GL7CDIFKUBIPEC52BROAQIAPW53XBRJVN6ZJVTG6V";

pub const WETH_ETHEREUM: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const USDC_ETHEREUM: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

/// Lumens, the default "from" token.
pub fn xlm() -> Token {
    Token::new(STELLAR_NATIVE_ADDRESS, "XLM", "Stellar Lumens", 7, ChainId::NATIVE)
        .native()
        .with_logo("⭐")
}

/// Ether, the default "to" token.
pub fn eth() -> Token {
    Token::new(EVM_NATIVE_ADDRESS, "ETH", "Ethereum", 18, ChainId::ETHEREUM)
        .native()
        .with_logo("♦️")
}

/// Tokens offered before any list is fetched.
pub fn popular_tokens() -> Vec<Token> {
    vec![
        xlm(),
        Token::new(
            &format!("USDC:{}", USDC_STELLAR_ISSUER),
            "USDC",
            "USD Coin",
            6,
            ChainId::NATIVE,
        )
        .with_logo("🔵"),
        Token::new(
            &format!("USDT:{}", USDT_STELLAR_ISSUER),
            "USDT",
            "Tether USD",
            6,
            ChainId::NATIVE,
        )
        .with_logo("🟢"),
        Token::new(WETH_ETHEREUM, "WETH", "Wrapped Ethereum", 18, ChainId::ETHEREUM).with_logo("♦️"),
        eth(),
        Token::new(USDC_ETHEREUM, "USDC", "USD Coin (Ethereum)", 6, ChainId::ETHEREUM)
            .with_logo("🔵"),
    ]
}

/// Case-insensitive substring match on symbol, name or address.
/// An empty (or blank) term matches everything.
pub fn matches_search(token: &Token, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    token.symbol.to_lowercase().contains(&term)
        || token.name.to_lowercase().contains(&term)
        || token.address.to_lowercase().contains(&term)
}

/// Selector filter: search match, minus the token picked on the other side.
pub fn filter_tokens<'t>(
    tokens: &'t [Token],
    term: &str,
    other_side: Option<&Token>,
) -> Vec<&'t Token> {
    tokens
        .iter()
        .filter(|t| matches_search(t, term))
        .filter(|t| other_side.map_or(true, |other| !t.same_identity(other)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_tokens_are_unique() {
        let tokens = popular_tokens();
        assert_eq!(tokens.len(), 6);
        for (i, a) in tokens.iter().enumerate() {
            for b in tokens.iter().skip(i + 1) {
                assert!(!a.same_identity(b), "{} duplicates {}", a, b);
            }
        }
    }

    #[test]
    fn test_popular_stellar_tokens_map_to_assets() {
        for token in popular_tokens().iter().filter(|t| t.is_on_native_ledger()) {
            assert!(token.stellar_asset().is_ok(), "{}", token);
        }
    }

    #[test]
    fn test_empty_search_matches_all() {
        let tokens = popular_tokens();
        assert_eq!(filter_tokens(&tokens, "", None).len(), tokens.len());
        assert_eq!(filter_tokens(&tokens, "   ", None).len(), tokens.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_symbol_name_address() {
        let tokens = popular_tokens();

        let usd: Vec<_> = filter_tokens(&tokens, "usd", None)
            .into_iter()
            .map(|t| t.symbol.as_str())
            .collect();
        assert_eq!(usd, vec!["USDC", "USDT", "USDC"]);

        let by_name = filter_tokens(&tokens, "LUMENS", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol, "XLM");

        let by_address = filter_tokens(&tokens, "gcqtgzqq", None);
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].symbol, "USDT");
    }

    #[test]
    fn test_other_side_is_excluded_by_identity() {
        let tokens = popular_tokens();
        let other = xlm();
        let filtered = filter_tokens(&tokens, "", Some(&other));
        assert_eq!(filtered.len(), tokens.len() - 1);
        assert!(filtered.iter().all(|t| !t.same_identity(&other)));

        // Same symbol on another chain stays selectable.
        let stellar_usdc = &tokens[1];
        let usdc = filter_tokens(&tokens, "usdc", Some(stellar_usdc));
        assert_eq!(usdc.len(), 1);
        assert_eq!(usdc[0].chain_id, ChainId::ETHEREUM);
    }
}
