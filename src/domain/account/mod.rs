//! Account domain: Stellar account snapshots and the wallet session.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod session;
pub mod wire;

use crate::shared::AccountId;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use session::WalletSession;

/// Entries every account holds before subentries: the account itself and
/// one more base reserve.
const BASE_RESERVE_ENTRIES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: u8,
    pub med: u8,
    pub high: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    pub auth_required: bool,
    pub auth_revocable: bool,
    pub auth_immutable: bool,
}

/// One balance line. `asset` is `XLM` or `CODE:ISSUER` (`pool:ID` for
/// liquidity pool shares).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub asset: String,
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_liabilities: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_liabilities: Option<Decimal>,
}

impl Balance {
    pub fn is_native(&self) -> bool {
        self.asset == "XLM"
    }

    /// Balance at ledger precision with thousands separators: `1,250.5`.
    pub fn display_amount(&self) -> String {
        crate::shared::fmt::num::display_with_decimals(self.balance.to_f64().unwrap_or(0.0), 7)
    }
}

/// Snapshot of a Stellar account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub public_key: AccountId,
    /// Native balance, zero if the account somehow lacks one.
    pub balance: Decimal,
    pub sequence: i64,
    pub subentry_count: u32,
    pub thresholds: Thresholds,
    pub flags: Flags,
    pub balances: Vec<Balance>,
}

impl AccountInfo {
    /// Balance for an asset label (`XLM` or `CODE:ISSUER`).
    pub fn balance_of(&self, asset: &str) -> Option<Decimal> {
        self.balances
            .iter()
            .find(|b| b.asset == asset)
            .map(|b| b.balance)
    }

    /// Lumens locked by the reserve: `(2 + subentries) × base_reserve`.
    pub fn minimum_balance(&self, base_reserve: Decimal) -> Decimal {
        Decimal::from(BASE_RESERVE_ENTRIES + self.subentry_count) * base_reserve
    }

    /// Lumens that can leave the account right now.
    pub fn spendable_native(&self, base_reserve: Decimal) -> Decimal {
        let selling = self
            .balances
            .iter()
            .find(|b| b.is_native())
            .and_then(|b| b.selling_liabilities)
            .unwrap_or(Decimal::ZERO);
        (self.balance - self.minimum_balance(base_reserve) - selling).max(Decimal::ZERO)
    }
}
