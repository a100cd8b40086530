//! Network URL constants for the Stellarealize SDK.

use std::str::FromStr;

/// Swap-aggregation API base URL.
pub const DEFAULT_AGGREGATOR_URL: &str = "https://api.1inch.dev";

/// Aggregator API version segment.
pub const AGGREGATOR_API_VERSION: &str = "v6.0";

/// Horizon (testnet).
pub const HORIZON_TESTNET_URL: &str = "https://horizon-testnet.stellar.org";

/// Horizon (public network).
pub const HORIZON_MAINNET_URL: &str = "https://horizon.stellar.org";

/// Testnet account funding service.
pub const FRIENDBOT_URL: &str = "https://friendbot.stellar.org";

pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const MAINNET_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Block explorer base for account links.
pub const EXPLORER_URL: &str = "https://stellar.expert/explorer";

/// Which Stellar network the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StellarNetwork {
    #[default]
    Testnet,
    Mainnet,
}

impl StellarNetwork {
    pub fn horizon_url(&self) -> &'static str {
        match self {
            Self::Testnet => HORIZON_TESTNET_URL,
            Self::Mainnet => HORIZON_MAINNET_URL,
        }
    }

    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Testnet => TESTNET_PASSPHRASE,
            Self::Mainnet => MAINNET_PASSPHRASE,
        }
    }

    /// Friendbot only exists on testnet.
    pub fn friendbot_url(&self) -> Option<&'static str> {
        match self {
            Self::Testnet => Some(FRIENDBOT_URL),
            Self::Mainnet => None,
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::Testnet)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }

    /// Explorer link for an account.
    pub fn account_explorer_url(&self, account_id: &str) -> String {
        let segment = match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "public",
        };
        format!("{}/{}/account/{}", EXPLORER_URL, segment, account_id)
    }
}

impl FromStr for StellarNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" | "test" => Ok(Self::Testnet),
            "mainnet" | "public" | "pubnet" => Ok(Self::Mainnet),
            _ => Err(format!("Unknown Stellar network: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parses_case_insensitively() {
        assert_eq!("TESTNET".parse(), Ok(StellarNetwork::Testnet));
        assert_eq!(" public ".parse(), Ok(StellarNetwork::Mainnet));
        assert!("futurenet".parse::<StellarNetwork>().is_err());
    }

    #[test]
    fn test_friendbot_only_on_testnet() {
        assert!(StellarNetwork::Testnet.friendbot_url().is_some());
        assert!(StellarNetwork::Mainnet.friendbot_url().is_none());
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            StellarNetwork::Testnet.account_explorer_url("GABC"),
            "https://stellar.expert/explorer/testnet/account/GABC"
        );
    }
}
