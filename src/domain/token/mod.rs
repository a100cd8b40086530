//! Token domain: swappable tokens on Stellar and the aggregator chains.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod favorites;
pub mod registry;
pub mod wire;

use crate::domain::ledger::{Asset, AssetParseError};
use crate::shared::ChainId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address used by the aggregator for a chain's gas token.
pub const EVM_NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Address of the lumen on the native ledger.
pub const STELLAR_NATIVE_ADDRESS: &str = "native";

// ─── Token ───────────────────────────────────────────────────────────────────

/// A swappable token. Identity is `(address, chain_id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub chain_id: ChainId,
    #[serde(default)]
    pub is_native: bool,
    #[serde(default, rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl Token {
    pub fn new(address: &str, symbol: &str, name: &str, decimals: u8, chain_id: ChainId) -> Self {
        Self {
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            chain_id,
            is_native: false,
            logo_uri: None,
        }
    }

    pub fn native(mut self) -> Self {
        self.is_native = true;
        self
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo_uri = Some(logo.to_string());
        self
    }

    /// Same address on the same chain. Address comparison ignores ASCII case
    /// because EVM addresses arrive both checksummed and lowercased.
    pub fn same_identity(&self, other: &Token) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }

    pub fn is_on_native_ledger(&self) -> bool {
        self.chain_id.is_native()
    }

    /// The Stellar asset behind a native-ledger token.
    pub fn stellar_asset(&self) -> Result<Asset, AssetParseError> {
        if !self.is_on_native_ledger() {
            return Err(AssetParseError(self.address.clone()));
        }
        if self.is_native || self.address == STELLAR_NATIVE_ADDRESS {
            return Ok(Asset::Native);
        }
        Asset::parse(&self.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.chain_id.name())
    }
}
