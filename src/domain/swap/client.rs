//! Swaps sub-client: swap transactions, approvals, Fusion+ orders.

use crate::client::StellarealizeClient;
use crate::domain::swap::wire::{
    ApproveTransactionResponse, FusionSwapRequest, LiquiditySource, SwapParams, SwapResponse,
};
use crate::error::SdkError;
use crate::shared::ChainId;

/// Sub-client for swap execution data from the aggregator.
pub struct Swaps<'a> {
    pub(crate) client: &'a StellarealizeClient,
}

impl<'a> Swaps<'a> {
    /// Unsigned swap transaction on `chain`.
    pub async fn swap(&self, chain: ChainId, params: &SwapParams) -> Result<SwapResponse, SdkError> {
        require_aggregator_chain(chain)?;
        Ok(self.client.aggregator.get_swap(chain, params).await?)
    }

    /// Submit a cross-chain order. Never retried.
    pub async fn fusion_swap(
        &self,
        request: &FusionSwapRequest,
    ) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.aggregator.post_fusion_swap(request).await?)
    }

    pub async fn liquidity_sources(&self, chain: ChainId) -> Result<Vec<LiquiditySource>, SdkError> {
        require_aggregator_chain(chain)?;
        Ok(self
            .client
            .aggregator
            .get_liquidity_sources(chain)
            .await?
            .protocols)
    }

    /// Router address that needs the token allowance.
    pub async fn spender(&self, chain: ChainId) -> Result<String, SdkError> {
        require_aggregator_chain(chain)?;
        Ok(self.client.aggregator.get_spender(chain).await?.address)
    }

    /// Approval transaction; `raw_amount = None` approves an unlimited amount.
    pub async fn approve_transaction(
        &self,
        chain: ChainId,
        token_address: &str,
        raw_amount: Option<u128>,
    ) -> Result<ApproveTransactionResponse, SdkError> {
        require_aggregator_chain(chain)?;
        Ok(self
            .client
            .aggregator
            .get_approve_transaction(chain, token_address, raw_amount)
            .await?)
    }

    /// Current allowance as a raw decimal string.
    pub async fn allowance(
        &self,
        chain: ChainId,
        token_address: &str,
        wallet_address: &str,
    ) -> Result<String, SdkError> {
        require_aggregator_chain(chain)?;
        Ok(self
            .client
            .aggregator
            .get_allowance(chain, token_address, wallet_address)
            .await?
            .allowance)
    }
}

fn require_aggregator_chain(chain: ChainId) -> Result<(), SdkError> {
    if chain.is_aggregator_chain() {
        Ok(())
    } else {
        Err(SdkError::Validation(format!(
            "Chain {} ({}) is not served by the aggregator",
            chain,
            chain.name()
        )))
    }
}
