//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backends send, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod scaling;
pub mod serde_util;

pub use scaling::{from_raw_amount, parse_amount, to_raw_amount, ScalingError};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ChainId ─────────────────────────────────────────────────────────────────

/// Numeric chain identifier.
///
/// Aggregator chains use their EVM chain id. Stellar, which has none, is `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    /// The native ledger (Stellar).
    pub const NATIVE: ChainId = ChainId(0);
    pub const ETHEREUM: ChainId = ChainId(1);
    pub const OPTIMISM: ChainId = ChainId(10);
    pub const BSC: ChainId = ChainId(56);
    pub const GNOSIS: ChainId = ChainId(100);
    pub const POLYGON: ChainId = ChainId(137);
    pub const FANTOM: ChainId = ChainId(250);
    pub const ZK_SYNC_ERA: ChainId = ChainId(324);
    pub const KLAYTN: ChainId = ChainId(8217);
    pub const BASE: ChainId = ChainId(8453);
    pub const ARBITRUM: ChainId = ChainId(42161);
    pub const AVALANCHE: ChainId = ChainId(43114);
    pub const AURORA: ChainId = ChainId(1313161554);

    /// Every chain the aggregator supports.
    pub const AGGREGATOR_CHAINS: [ChainId; 12] = [
        Self::ETHEREUM,
        Self::BSC,
        Self::POLYGON,
        Self::OPTIMISM,
        Self::ARBITRUM,
        Self::GNOSIS,
        Self::AVALANCHE,
        Self::FANTOM,
        Self::KLAYTN,
        Self::AURORA,
        Self::ZK_SYNC_ERA,
        Self::BASE,
    ];

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    pub fn is_native(&self) -> bool {
        *self == Self::NATIVE
    }

    pub fn is_aggregator_chain(&self) -> bool {
        Self::AGGREGATOR_CHAINS.contains(self)
    }

    /// Display name shown next to a token.
    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "Stellar",
            1 => "Ethereum",
            10 => "Optimism",
            56 => "BSC",
            100 => "Gnosis",
            137 => "Polygon",
            250 => "Fantom",
            324 => "zkSync Era",
            8217 => "Klaytn",
            8453 => "Base",
            42161 => "Arbitrum",
            43114 => "Avalanche",
            1313161554 => "Aurora",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(ChainId(id))
    }
}

// ─── AccountId ───────────────────────────────────────────────────────────────

/// A Stellar account id (`G...` strkey).
///
/// Serializes transparently as a JSON string. Can be used as a HashMap key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub const LENGTH: usize = 56;

    /// Parse and validate an account id.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if !is_valid_account_id(s) {
            return Err(format!("Invalid Stellar account id: {}", s));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shape check for a Stellar public key: 56 chars, `G` prefix, base-32 alphabet.
///
/// The trailing CRC is not verified; Horizon rejects those.
pub fn is_valid_account_id(s: &str) -> bool {
    s.len() == AccountId::LENGTH
        && s.starts_with('G')
        && s.bytes().all(|b| matches!(b, b'A'..=b'Z' | b'2'..=b'7'))
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AccountId::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── SlippageTolerance ───────────────────────────────────────────────────────

/// Slippage tolerance selectable in the swap settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlippageTolerance {
    #[serde(rename = "0.1")]
    Tenth,
    #[default]
    #[serde(rename = "0.5")]
    Half,
    #[serde(rename = "1.0")]
    One,
}

impl SlippageTolerance {
    pub const ALL: [SlippageTolerance; 3] = [Self::Tenth, Self::Half, Self::One];

    /// Tolerance as a percentage (`0.5` means 0.5 %).
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Tenth => Decimal::new(1, 1),
            Self::Half => Decimal::new(5, 1),
            Self::One => Decimal::new(10, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenth => "0.1",
            Self::Half => "0.5",
            Self::One => "1.0",
        }
    }
}

impl std::fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_str())
    }
}

impl TryFrom<Decimal> for SlippageTolerance {
    type Error = String;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.percent() == value)
            .ok_or_else(|| format!("Unsupported slippage tolerance: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

    #[test]
    fn test_chain_id_native() {
        assert!(ChainId::NATIVE.is_native());
        assert!(!ChainId::ETHEREUM.is_native());
        assert!(!ChainId::NATIVE.is_aggregator_chain());
        assert!(ChainId::BASE.is_aggregator_chain());
    }

    #[test]
    fn test_chain_names() {
        assert_eq!(ChainId::NATIVE.name(), "Stellar");
        assert_eq!(ChainId::ETHEREUM.name(), "Ethereum");
        assert_eq!(ChainId::BSC.name(), "BSC");
        assert_eq!(ChainId::new(999).name(), "Unknown");
    }

    #[test]
    fn test_chain_id_serde() {
        let id: ChainId = serde_json::from_str("42161").unwrap();
        assert_eq!(id, ChainId::ARBITRUM);
        assert_eq!(serde_json::to_string(&ChainId::NATIVE).unwrap(), "0");
    }

    #[test]
    fn test_account_id_validation() {
        assert!(AccountId::parse(ACCOUNT).is_ok());
        assert!(AccountId::parse(&format!("  {}  ", ACCOUNT)).is_ok());
        // secret seeds start with S
        assert!(AccountId::parse(&ACCOUNT.replacen('G', "S", 1)).is_err());
        assert!(AccountId::parse(&ACCOUNT[..55]).is_err());
        assert!(AccountId::parse(&ACCOUNT.to_lowercase()).is_err());
        assert!(AccountId::parse(&ACCOUNT.replace('Z', "1")).is_err());
    }

    #[test]
    fn test_account_id_serde_rejects_garbage() {
        let ok: AccountId = serde_json::from_str(&format!("\"{}\"", ACCOUNT)).unwrap();
        assert_eq!(ok.as_str(), ACCOUNT);
        assert!(serde_json::from_str::<AccountId>("\"native\"").is_err());
    }

    #[test]
    fn test_slippage_default_and_values() {
        assert_eq!(SlippageTolerance::default(), SlippageTolerance::Half);
        assert_eq!(SlippageTolerance::Tenth.percent(), Decimal::new(1, 1));
        assert_eq!(SlippageTolerance::One.to_string(), "1.0%");
        assert_eq!(
            SlippageTolerance::try_from(Decimal::new(5, 1)).unwrap(),
            SlippageTolerance::Half
        );
        assert!(SlippageTolerance::try_from(Decimal::new(3, 0)).is_err());
    }
}
