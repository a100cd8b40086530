//! Ledger domain: Stellar assets, DEX orderbooks, network info, transaction finality.

#[cfg(feature = "http")]
pub mod client;
pub(crate) mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places of every Stellar amount.
pub const STELLAR_DECIMALS: u8 = 7;

/// One stroop in XLM.
pub const STROOPS_PER_XLM: i64 = 10_000_000;

/// A Stellar transaction hash: 32 bytes, hex encoded.
pub fn is_valid_tx_hash(hash: &str) -> bool {
    hash.len() == 64 && hex::decode(hash).is_ok()
}

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A Stellar asset: the native lumen or an issued credit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Native,
    Credit { code: String, issuer: String },
}

impl Asset {
    pub fn credit(code: &str, issuer: &str) -> Self {
        Asset::Credit {
            code: code.to_string(),
            issuer: issuer.to_string(),
        }
    }

    /// Parse the dashboard's token address form: `native` or `CODE:ISSUER`.
    pub fn parse(s: &str) -> Result<Self, AssetParseError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("native") || s == "XLM" {
            return Ok(Asset::Native);
        }

        let (code, issuer) = s
            .split_once(':')
            .ok_or_else(|| AssetParseError(s.to_string()))?;

        if code.is_empty()
            || code.len() > 12
            || !code.chars().all(|c| c.is_ascii_alphanumeric())
            || !crate::shared::is_valid_account_id(issuer)
        {
            return Err(AssetParseError(s.to_string()));
        }

        Ok(Asset::credit(code, issuer))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// Horizon's `asset_type` value.
    pub fn asset_type(&self) -> &'static str {
        match self {
            Asset::Native => "native",
            Asset::Credit { code, .. } if code.len() <= 4 => "credit_alphanum4",
            Asset::Credit { .. } => "credit_alphanum12",
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Asset::Native => "XLM",
            Asset::Credit { code, .. } => code,
        }
    }

    pub fn issuer(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::Credit { issuer, .. } => Some(issuer),
        }
    }

    /// Canonical form used in Horizon list parameters: `native` or `CODE:ISSUER`.
    pub fn canonical(&self) -> String {
        match self {
            Asset::Native => "native".to_string(),
            Asset::Credit { code, issuer } => format!("{}:{}", code, issuer),
        }
    }

    /// Balance label shown to users: `XLM` or `CODE:ISSUER`.
    pub fn label(&self) -> String {
        match self {
            Asset::Native => "XLM".to_string(),
            Asset::Credit { code, issuer } => format!("{}:{}", code, issuer),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetParseError(pub String);

impl fmt::Display for AssetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not a Stellar asset: {}", self.0)
    }
}

impl std::error::Error for AssetParseError {}

// ─── Orderbook ───────────────────────────────────────────────────────────────

/// One price level of a DEX orderbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Decimal,
    pub amount: Decimal,
}

/// Snapshot of the native DEX book for a selling/buying pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Orderbook {
    pub base: Asset,
    pub counter: Asset,
    /// Highest price first.
    pub bids: Vec<PriceLevel>,
    /// Lowest price first.
    pub asks: Vec<PriceLevel>,
}

impl Orderbook {
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l.price)
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l.price)
    }

    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid.checked_add(ask).map(|sum| sum / Decimal::TWO),
            _ => None,
        }
    }

    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

// ─── Network ─────────────────────────────────────────────────────────────────

/// Latest-ledger view of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    pub latest_ledger: u32,
    pub protocol_version: u32,
    pub base_fee_stroops: u32,
    pub base_reserve_stroops: u32,
    pub closed_at: DateTime<Utc>,
    pub network_passphrase: String,
}

impl NetworkInfo {
    /// Base reserve in XLM.
    pub fn base_reserve_xlm(&self) -> Decimal {
        Decimal::new(self.base_reserve_stroops as i64, STELLAR_DECIMALS as u32).normalize()
    }
}

/// A path found by strict-send path finding.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPath {
    pub source_amount: Decimal,
    pub destination: Asset,
    pub destination_amount: Decimal,
    /// Intermediate assets, in hop order.
    pub hops: Vec<Asset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

    #[test]
    fn test_asset_parse() {
        assert_eq!(Asset::parse("native").unwrap(), Asset::Native);
        let usdc = Asset::parse(&format!("USDC:{}", ISSUER)).unwrap();
        assert_eq!(usdc.code(), "USDC");
        assert_eq!(usdc.issuer(), Some(ISSUER));
        assert_eq!(usdc.asset_type(), "credit_alphanum4");
        assert!(Asset::parse("0x0000000000000000000000000000000000000000").is_err());
        assert!(Asset::parse("USDC:notanissuer").is_err());
        assert!(Asset::parse(&format!("TOOLONGASSETCODE:{}", ISSUER)).is_err());
    }

    #[test]
    fn test_tx_hash_validation() {
        let hash = "3389e9f0f1a65f19736cacf544c2e825313e8447f569233bb8db39aa607c8889";
        assert!(is_valid_tx_hash(hash));
        assert!(is_valid_tx_hash(&hash.to_uppercase()));
        assert!(!is_valid_tx_hash(&hash[..63]));
        assert!(!is_valid_tx_hash(&format!("0x{}", &hash[2..])));
    }

    #[test]
    fn test_asset_type_alphanum12() {
        let asset = Asset::credit("LONGCODE", ISSUER);
        assert_eq!(asset.asset_type(), "credit_alphanum12");
    }

    #[test]
    fn test_asset_labels() {
        assert_eq!(Asset::Native.label(), "XLM");
        assert_eq!(Asset::Native.canonical(), "native");
        let usdc = Asset::credit("USDC", ISSUER);
        assert_eq!(usdc.label(), format!("USDC:{}", ISSUER));
        assert_eq!(usdc.canonical(), usdc.label());
    }

    #[test]
    fn test_orderbook_mid_and_spread() {
        let book = Orderbook {
            base: Asset::Native,
            counter: Asset::credit("USDC", ISSUER),
            bids: vec![PriceLevel {
                price: Decimal::from_str("0.11").unwrap(),
                amount: Decimal::from(100),
            }],
            asks: vec![PriceLevel {
                price: Decimal::from_str("0.13").unwrap(),
                amount: Decimal::from(50),
            }],
        };
        assert_eq!(book.mid_price(), Some(Decimal::from_str("0.12").unwrap()));
        assert_eq!(book.spread(), Some(Decimal::from_str("0.02").unwrap()));
        assert!(!book.is_empty());
    }

    #[test]
    fn test_base_reserve_xlm() {
        let info = NetworkInfo {
            latest_ledger: 1,
            protocol_version: 21,
            base_fee_stroops: 100,
            base_reserve_stroops: 5_000_000,
            closed_at: Utc::now(),
            network_passphrase: String::new(),
        };
        assert_eq!(info.base_reserve_xlm(), Decimal::from_str("0.5").unwrap());
    }
}
