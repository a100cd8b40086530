//! History domain: transaction records and the activity-list filter.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::token::Token;
use crate::shared::fmt;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Kind / status ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Swap,
    Bridge,
    AddLiquidity,
    RemoveLiquidity,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Swap => "swap",
            TxKind::Bridge => "bridge",
            TxKind::AddLiquidity => "add_liquidity",
            TxKind::RemoveLiquidity => "remove_liquidity",
        }
    }

    pub fn is_liquidity(&self) -> bool {
        matches!(self, TxKind::AddLiquidity | TxKind::RemoveLiquidity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "success",
            TxStatus::Pending => "pending",
            TxStatus::Failed => "failed",
        }
    }

    /// Unknown values read as pending.
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "success" | "successful" | "completed" | "confirmed" => TxStatus::Success,
            "failed" | "failure" | "reverted" => TxStatus::Failed,
            _ => TxStatus::Pending,
        }
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, TxStatus::Pending)
    }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One row of the activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub kind: TxKind,
    pub hash: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub amount: Decimal,
    pub token: Token,
    pub timestamp: DateTime<Utc>,
    pub status: TxStatus,
    /// In the chain's gas token.
    pub fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<u64>,
}

impl TransactionRecord {
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        fmt::time::time_ago(self.timestamp, now)
    }

    pub fn display_amount(&self) -> String {
        fmt::num::history_amount(self.amount.to_f64().unwrap_or(0.0))
    }

    pub fn display_fee(&self) -> String {
        fmt::num::history_amount(self.fee.to_f64().unwrap_or(0.0))
    }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HistoryFilter {
    #[default]
    All,
    Swap,
    Bridge,
    /// Adds and removes.
    Liquidity,
}

impl HistoryFilter {
    pub fn matches(&self, kind: TxKind) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Swap => kind == TxKind::Swap,
            HistoryFilter::Bridge => kind == TxKind::Bridge,
            HistoryFilter::Liquidity => kind.is_liquidity(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Swap => "swap",
            HistoryFilter::Bridge => "bridge",
            HistoryFilter::Liquidity => "liquidity",
        }
    }
}

impl FromStr for HistoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(HistoryFilter::All),
            "swap" => Ok(HistoryFilter::Swap),
            "bridge" => Ok(HistoryFilter::Bridge),
            "liquidity" => Ok(HistoryFilter::Liquidity),
            _ => Err(format!("Unknown history filter: {}", s)),
        }
    }
}

/// Case-insensitive search over hash, sender and token symbol.
pub fn matches_search(tx: &TransactionRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || tx.hash.to_lowercase().contains(&term)
        || tx.from.to_lowercase().contains(&term)
        || tx.token.symbol.to_lowercase().contains(&term)
}

pub fn filter_transactions<'t>(
    txs: &'t [TransactionRecord],
    filter: HistoryFilter,
    term: &str,
) -> Vec<&'t TransactionRecord> {
    txs.iter()
        .filter(|tx| filter.matches(tx.kind) && matches_search(tx, term))
        .collect()
}
