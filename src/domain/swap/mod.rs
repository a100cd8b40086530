//! Swap domain: turning a quote into something a wallet can sign.
//!
//! Signing and submission stay with the wallet. This module only decides
//! what to ask for: an aggregator swap transaction, a Fusion+ order, or a
//! native-ledger path payment.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::ledger::{Asset, STELLAR_DECIMALS};
use crate::domain::quote::{QuoteError, QuoteRoute, SwapQuote};
use crate::shared::{to_raw_amount, ChainId};
use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;
use std::str::FromStr;

use self::wire::{FusionSwapRequest, SwapParams};

/// Strict-send path payment for a native-ledger swap.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPaymentPlan {
    pub send_asset: Asset,
    pub send_amount: Decimal,
    pub dest_asset: Asset,
    /// Least acceptable destination amount (quote output less slippage).
    pub dest_min: Decimal,
}

/// What executing a quote requires.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapPlan {
    SameChain { chain: ChainId, params: SwapParams },
    CrossChain(FusionSwapRequest),
    NativeLedger(PathPaymentPlan),
}

impl SwapPlan {
    /// Plan execution of `quote` from wallet `from`.
    pub fn from_quote(
        quote: &SwapQuote,
        from: &str,
        receiver: Option<&str>,
    ) -> Result<Self, QuoteError> {
        let input = &quote.input_token;
        let output = &quote.output_token;

        match QuoteRoute::select(input.chain_id, output.chain_id) {
            QuoteRoute::SameChain(chain) => {
                let raw = to_raw_amount(&truncate(quote.input_amount, input.decimals), input.decimals)?;
                Ok(SwapPlan::SameChain {
                    chain,
                    params: SwapParams {
                        src: input.address.clone(),
                        dst: output.address.clone(),
                        amount: raw.to_string(),
                        from: from.to_string(),
                        slippage: quote.slippage.as_str().to_string(),
                        receiver: receiver.map(str::to_string),
                        ..SwapParams::default()
                    },
                })
            }
            QuoteRoute::CrossChain { from: src_chain, to: dst_chain } => {
                let raw = to_raw_amount(&truncate(quote.input_amount, input.decimals), input.decimals)?;
                Ok(SwapPlan::CrossChain(FusionSwapRequest {
                    src: input.address.clone(),
                    dst: output.address.clone(),
                    amount: raw.to_string(),
                    from_chain_id: src_chain,
                    to_chain_id: dst_chain,
                    from: from.to_string(),
                    receiver: receiver.map(str::to_string),
                }))
            }
            QuoteRoute::NativeLedger => {
                let minimum = quote.minimum_received().ok_or_else(|| {
                    QuoteError::InvalidResponse(format!(
                        "minimum received for {} overflows",
                        quote.output_amount
                    ))
                })?;
                let send_asset = input
                    .stellar_asset()
                    .map_err(|e| QuoteError::UnsupportedToken(e.to_string()))?;
                let dest_asset = output
                    .stellar_asset()
                    .map_err(|e| QuoteError::UnsupportedToken(e.to_string()))?;
                Ok(SwapPlan::NativeLedger(PathPaymentPlan {
                    send_asset,
                    send_amount: truncate(quote.input_amount, STELLAR_DECIMALS),
                    dest_asset,
                    dest_min: truncate(minimum, STELLAR_DECIMALS),
                }))
            }
        }
    }
}

/// Whether an ERC-20 allowance (raw, decimal string) falls short of
/// `raw_amount`. Allowances too large for 128 bits never fall short.
pub fn needs_approval(allowance: &str, raw_amount: u128) -> bool {
    let allowance = allowance.trim();
    match u128::from_str(allowance) {
        Ok(current) => current < raw_amount,
        Err(_) => !(allowance.len() > 38 && allowance.bytes().all(|b| b.is_ascii_digit())),
    }
}

fn truncate(amount: Decimal, decimals: u8) -> Decimal {
    amount
        .round_dp_with_strategy(decimals as u32, RoundingStrategy::ToZero)
        .normalize()
}
