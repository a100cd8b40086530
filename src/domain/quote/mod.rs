//! Quote domain: route selection, normalized quotes, explicit quote state.
//!
//! Three backends answer quote requests with three different shapes:
//! the aggregator's cross-chain (Fusion+) quote, its same-chain quote, and
//! Horizon strict-send path finding for swaps that stay on the native
//! ledger. [`QuoteRoute::select`] decides which one applies and
//! [`selector::QuoteSelector`] folds every answer into one [`SwapQuote`].

#[cfg(feature = "http")]
pub mod client;
pub mod impact;
pub mod selector;
pub mod state;
pub mod wire;

use crate::domain::token::Token;
use crate::error::SdkError;
use crate::shared::{ChainId, ScalingError, SlippageTolerance};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use impact::{price_impact, ImpactSeverity};
pub use selector::{QuoteBackend, QuoteSelector};
pub use state::{QuoteSession, QuoteState, QuoteTracker};

/// Shown to users for any quote failure.
pub const QUOTE_FAILED_MESSAGE: &str = "Failed to get quote. Please try again.";

// ─── Route ───────────────────────────────────────────────────────────────────

/// Which backend prices a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteRoute {
    /// Tokens live on different chains.
    CrossChain { from: ChainId, to: ChainId },
    /// Both tokens live on the native ledger.
    NativeLedger,
    /// Both tokens live on the same aggregator chain.
    SameChain(ChainId),
}

impl QuoteRoute {
    /// First match wins: different chains, then both native, then same chain.
    pub fn select(from: ChainId, to: ChainId) -> Self {
        if from != to {
            QuoteRoute::CrossChain { from, to }
        } else if from.is_native() {
            QuoteRoute::NativeLedger
        } else {
            QuoteRoute::SameChain(from)
        }
    }

    /// Protocol label of the single route hop.
    pub fn protocol(&self) -> &'static str {
        match self {
            QuoteRoute::CrossChain { .. } => "1inch Fusion+",
            QuoteRoute::NativeLedger => "Stellar DEX",
            QuoteRoute::SameChain(_) => "1inch",
        }
    }

    /// Fee label shown with the quote.
    pub fn fee(&self) -> &'static str {
        match self {
            QuoteRoute::NativeLedger => "0.01%",
            _ => "0.3%",
        }
    }
}

impl fmt::Display for QuoteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteRoute::CrossChain { from, to } => {
                write!(f, "cross-chain {} -> {}", from.name(), to.name())
            }
            QuoteRoute::NativeLedger => write!(f, "native ledger"),
            QuoteRoute::SameChain(chain) => write!(f, "same-chain {}", chain.name()),
        }
    }
}

// ─── Request ─────────────────────────────────────────────────────────────────

/// User input for a quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub from: Token,
    pub to: Token,
    /// Amount of `from` as typed by the user.
    pub amount: String,
    pub slippage: SlippageTolerance,
}

impl QuoteRequest {
    pub fn new(from: Token, to: Token, amount: &str) -> Self {
        Self {
            from,
            to,
            amount: amount.to_string(),
            slippage: SlippageTolerance::default(),
        }
    }

    pub fn with_slippage(mut self, slippage: SlippageTolerance) -> Self {
        self.slippage = slippage;
        self
    }

    pub fn route(&self) -> QuoteRoute {
        QuoteRoute::select(self.from.chain_id, self.to.chain_id)
    }

    /// Swap direction: tokens trade places and the current output amount
    /// (if any) becomes the new input.
    pub fn flipped(&self, current_output: Option<Decimal>) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            amount: current_output
                .map(|d| d.normalize().to_string())
                .unwrap_or_default(),
            slippage: self.slippage,
        }
    }
}

// ─── Quote ───────────────────────────────────────────────────────────────────

/// One hop of a quoted route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteHop {
    pub protocol: String,
    pub percentage: u8,
    pub from_token: Token,
    pub to_token: Token,
}

/// A normalized quote, whatever backend produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub input_amount: Decimal,
    pub output_amount: Decimal,
    pub input_token: Token,
    pub output_token: Token,
    /// Percent.
    pub price_impact: Decimal,
    pub fee: String,
    pub route: Vec<RouteHop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_gas: Option<u64>,
    pub slippage: SlippageTolerance,
}

impl SwapQuote {
    /// Output per unit of input.
    pub fn rate(&self) -> Option<Decimal> {
        if self.input_amount.is_zero() {
            return None;
        }
        self.output_amount.checked_div(self.input_amount)
    }

    /// Output after the worst accepted slippage. `None` on overflow.
    pub fn minimum_received(&self) -> Option<Decimal> {
        let kept = Decimal::ONE_HUNDRED.checked_sub(self.slippage.percent())?;
        self.output_amount
            .checked_div(Decimal::ONE_HUNDRED)?
            .checked_mul(kept)
    }

    pub fn impact_severity(&self) -> ImpactSeverity {
        ImpactSeverity::from_percent(self.price_impact)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Both sides are the same token")]
    SameToken,

    #[error("Unsupported token: {0}")]
    UnsupportedToken(String),

    #[error("Amount conversion failed: {0}")]
    Scaling(#[from] ScalingError),

    #[error("No path found on the native DEX")]
    NoPath,

    #[error("Invalid quote response: {0}")]
    InvalidResponse(String),

    #[error("Quote backend failed: {0}")]
    Backend(#[from] SdkError),
}

impl QuoteError {
    /// The only text shown to users; details go to the log.
    pub fn user_message(&self) -> &'static str {
        QUOTE_FAILED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::registry;
    use std::str::FromStr;

    fn quote(input: &str, output: &str, slippage: SlippageTolerance) -> SwapQuote {
        SwapQuote {
            input_amount: Decimal::from_str(input).unwrap(),
            output_amount: Decimal::from_str(output).unwrap(),
            input_token: registry::xlm(),
            output_token: registry::eth(),
            price_impact: Decimal::new(1, 1),
            fee: "0.3%".to_string(),
            route: vec![],
            estimated_gas: None,
            slippage,
        }
    }

    #[test]
    fn test_route_selection_priority() {
        assert_eq!(
            QuoteRoute::select(ChainId::NATIVE, ChainId::ETHEREUM),
            QuoteRoute::CrossChain {
                from: ChainId::NATIVE,
                to: ChainId::ETHEREUM
            }
        );
        assert_eq!(
            QuoteRoute::select(ChainId::BSC, ChainId::NATIVE),
            QuoteRoute::CrossChain {
                from: ChainId::BSC,
                to: ChainId::NATIVE
            }
        );
        assert!(matches!(
            QuoteRoute::select(ChainId::ETHEREUM, ChainId::POLYGON),
            QuoteRoute::CrossChain { .. }
        ));
        assert_eq!(
            QuoteRoute::select(ChainId::NATIVE, ChainId::NATIVE),
            QuoteRoute::NativeLedger
        );
        assert_eq!(
            QuoteRoute::select(ChainId::POLYGON, ChainId::POLYGON),
            QuoteRoute::SameChain(ChainId::POLYGON)
        );
    }

    #[test]
    fn test_route_labels() {
        assert_eq!(QuoteRoute::NativeLedger.fee(), "0.01%");
        assert_eq!(QuoteRoute::SameChain(ChainId::BSC).fee(), "0.3%");
        assert_eq!(QuoteRoute::SameChain(ChainId::BSC).protocol(), "1inch");
        assert_eq!(
            QuoteRoute::select(ChainId::NATIVE, ChainId::BASE).protocol(),
            "1inch Fusion+"
        );
    }

    #[test]
    fn test_rate_and_minimum_received() {
        let q = quote("10", "25", SlippageTolerance::One);
        assert_eq!(q.rate(), Some(Decimal::from_str("2.5").unwrap()));
        assert_eq!(q.minimum_received(), Some(Decimal::from_str("24.75").unwrap()));

        let zero = quote("0", "1", SlippageTolerance::Half);
        assert_eq!(zero.rate(), None);
    }

    #[test]
    fn test_minimum_received_at_decimal_max() {
        let q = quote("1", &Decimal::MAX.to_string(), SlippageTolerance::Half);
        let min = q.minimum_received().unwrap();
        assert!(min < Decimal::MAX);
        assert!(min > Decimal::ZERO);
    }

    #[test]
    fn test_flipped_moves_output_into_input() {
        let req = QuoteRequest::new(registry::xlm(), registry::eth(), "100")
            .with_slippage(SlippageTolerance::Tenth);
        let flipped = req.flipped(Some(Decimal::from_str("0.0042000").unwrap()));
        assert_eq!(flipped.from, registry::eth());
        assert_eq!(flipped.to, registry::xlm());
        assert_eq!(flipped.amount, "0.0042");
        assert_eq!(flipped.slippage, SlippageTolerance::Tenth);

        assert_eq!(req.flipped(None).amount, "");
    }

    #[test]
    fn test_every_error_has_the_same_user_message() {
        assert_eq!(QuoteError::NoPath.user_message(), QUOTE_FAILED_MESSAGE);
        assert_eq!(
            QuoteError::InvalidAmount("x".into()).user_message(),
            "Failed to get quote. Please try again."
        );
    }
}
