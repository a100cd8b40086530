//! Route selection and quote normalization.

use super::wire::{FusionQuoteRequest, FusionQuoteResponse, QuoteParams, QuoteResponse};
use super::{price_impact, QuoteError, QuoteRequest, QuoteRoute, RouteHop, SwapQuote};
use crate::domain::ledger::{Asset, PaymentPath, STELLAR_DECIMALS};
use crate::domain::token::Token;
use crate::error::SdkError;
use crate::shared::{from_raw_amount, parse_amount, to_raw_amount, ChainId};

use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;

/// Fixed price impact reported for cross-chain quotes.
const CROSS_CHAIN_IMPACT: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Fixed price impact reported for native DEX quotes.
const NATIVE_LEDGER_IMPACT: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// The three quote sources.
///
/// `StellarealizeClient` implements this over HTTP; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait QuoteBackend {
    /// Aggregator quote on one chain.
    async fn same_chain_quote(
        &self,
        chain: ChainId,
        params: &QuoteParams,
    ) -> Result<QuoteResponse, SdkError>;

    /// Aggregator cross-chain (Fusion+) quote.
    async fn cross_chain_quote(
        &self,
        request: &FusionQuoteRequest,
    ) -> Result<FusionQuoteResponse, SdkError>;

    /// Horizon strict-send path finding.
    async fn strict_send_paths(
        &self,
        source: &Asset,
        amount: &Decimal,
        destinations: &[Asset],
    ) -> Result<Vec<PaymentPath>, SdkError>;
}

impl<T: QuoteBackend + ?Sized> QuoteBackend for &T {
    async fn same_chain_quote(
        &self,
        chain: ChainId,
        params: &QuoteParams,
    ) -> Result<QuoteResponse, SdkError> {
        (**self).same_chain_quote(chain, params).await
    }

    async fn cross_chain_quote(
        &self,
        request: &FusionQuoteRequest,
    ) -> Result<FusionQuoteResponse, SdkError> {
        (**self).cross_chain_quote(request).await
    }

    async fn strict_send_paths(
        &self,
        source: &Asset,
        amount: &Decimal,
        destinations: &[Asset],
    ) -> Result<Vec<PaymentPath>, SdkError> {
        (**self).strict_send_paths(source, amount, destinations).await
    }
}

/// Picks the backend for a request and folds its answer into a `SwapQuote`.
pub struct QuoteSelector<'b, B: QuoteBackend + ?Sized> {
    backend: &'b B,
}

impl<'b, B: QuoteBackend + ?Sized> QuoteSelector<'b, B> {
    pub fn new(backend: &'b B) -> Self {
        Self { backend }
    }

    pub async fn quote(&self, request: &QuoteRequest) -> Result<SwapQuote, QuoteError> {
        let amount =
            parse_amount(&request.amount).map_err(|e| QuoteError::InvalidAmount(e.to_string()))?;
        if request.from.same_identity(&request.to) {
            return Err(QuoteError::SameToken);
        }

        let route = request.route();
        tracing::debug!(
            %route,
            from = %request.from,
            to = %request.to,
            amount = %amount,
            "Selected quote route"
        );

        let (priced, output, impact, estimated_gas) = match route {
            QuoteRoute::CrossChain { from, to } => {
                let priced = truncate_to(amount, request.from.decimals);
                let output = self.cross_chain(request, priced, from, to).await?;
                (priced, output, CROSS_CHAIN_IMPACT, None)
            }
            QuoteRoute::NativeLedger => {
                let priced = truncate_to(amount, STELLAR_DECIMALS);
                let output = self.native_ledger(request, priced).await?;
                (priced, output, NATIVE_LEDGER_IMPACT, None)
            }
            QuoteRoute::SameChain(chain) => {
                let priced = truncate_to(amount, request.from.decimals);
                let (output, gas) = self.same_chain(request, priced, chain).await?;
                let impact = price_impact(priced, output, Decimal::ONE).ok_or_else(|| {
                    QuoteError::InvalidResponse(format!(
                        "price impact of {} for {} overflows",
                        output, priced
                    ))
                })?;
                (priced, output, impact, gas)
            }
        };

        Ok(SwapQuote {
            input_amount: priced,
            output_amount: output,
            input_token: request.from.clone(),
            output_token: request.to.clone(),
            price_impact: impact,
            fee: route.fee().to_string(),
            route: vec![RouteHop {
                protocol: route.protocol().to_string(),
                percentage: 100,
                from_token: request.from.clone(),
                to_token: request.to.clone(),
            }],
            estimated_gas,
            slippage: request.slippage,
        })
    }

    async fn cross_chain(
        &self,
        request: &QuoteRequest,
        amount: Decimal,
        from: ChainId,
        to: ChainId,
    ) -> Result<Decimal, QuoteError> {
        let raw = raw_input(amount, &request.from)?;
        let body = FusionQuoteRequest {
            src: request.from.address.clone(),
            dst: request.to.address.clone(),
            amount: raw.to_string(),
            from_chain_id: from,
            to_chain_id: to,
        };
        let resp = self.backend.cross_chain_quote(&body).await?;
        Ok(from_raw_amount(&resp.dst_amount, request.to.decimals)?)
    }

    async fn same_chain(
        &self,
        request: &QuoteRequest,
        amount: Decimal,
        chain: ChainId,
    ) -> Result<(Decimal, Option<u64>), QuoteError> {
        let raw = raw_input(amount, &request.from)?;
        let params = QuoteParams::new(&request.from.address, &request.to.address, raw);
        let resp = self.backend.same_chain_quote(chain, &params).await?;
        let output = from_raw_amount(&resp.dst_amount, request.to.decimals)?;
        Ok((output, resp.estimated_gas))
    }

    async fn native_ledger(&self, request: &QuoteRequest, amount: Decimal) -> Result<Decimal, QuoteError> {
        let source = request
            .from
            .stellar_asset()
            .map_err(|e| QuoteError::UnsupportedToken(e.to_string()))?;
        let destination = request
            .to
            .stellar_asset()
            .map_err(|e| QuoteError::UnsupportedToken(e.to_string()))?;

        if amount.is_zero() {
            return Err(QuoteError::InvalidAmount(format!(
                "{} is below one stroop",
                request.amount
            )));
        }

        let paths = self
            .backend
            .strict_send_paths(&source, &amount, std::slice::from_ref(&destination))
            .await?;

        paths
            .into_iter()
            .filter(|p| p.destination == destination)
            .map(|p| p.destination_amount)
            .max()
            .filter(|out| *out > Decimal::ZERO)
            .map(|out| out.normalize())
            .ok_or(QuoteError::NoPath)
    }
}

/// Drops digits finer than `decimals`.
fn truncate_to(amount: Decimal, decimals: u8) -> Decimal {
    amount
        .round_dp_with_strategy(decimals as u32, RoundingStrategy::ToZero)
        .normalize()
}

/// `amount × 10^decimals`. `amount` is already truncated to the token's precision.
fn raw_input(amount: Decimal, token: &Token) -> Result<u128, QuoteError> {
    if amount.is_zero() {
        return Err(QuoteError::InvalidAmount(format!(
            "amount is below the smallest unit of {}",
            token.symbol
        )));
    }
    Ok(to_raw_amount(&amount, token.decimals)?)
}
