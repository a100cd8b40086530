//! `AggregatorHttp`: swap aggregator endpoints (quote, swap, approvals,
//! tokens, history, Fusion+).
//!
//! GETs retry with the idempotent policy. POSTs are never retried.

use crate::domain::history::wire::{HistoryQuery, HistoryResponse};
use crate::domain::quote::wire::{
    FusionQuoteRequest, FusionQuoteResponse, QuoteParams, QuoteResponse,
};
use crate::domain::swap::wire::{
    AllowanceQuery, AllowanceResponse, ApproveTransactionQuery, ApproveTransactionResponse,
    FusionSwapRequest, LiquiditySourcesResponse, SpenderResponse, SwapParams, SwapResponse,
};
use crate::domain::token::wire::TokensResponse;
use crate::error::HttpError;
use crate::http::client::RestClient;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::AGGREGATOR_API_VERSION;
use crate::shared::ChainId;

/// Low-level aggregator client. Sends the API key as a bearer token.
#[derive(Clone)]
pub struct AggregatorHttp {
    rest: RestClient,
}

impl AggregatorHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Ok(Self {
            rest: RestClient::new(base_url)?,
        })
    }

    pub fn with_idempotent_retry(mut self, config: RetryConfig) -> Self {
        self.rest = self.rest.with_idempotent_retry(config);
        self
    }

    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.rest = self.rest.with_auth_token(key);
        self
    }

    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    pub async fn set_api_key(&self, key: Option<String>) {
        self.rest.set_auth_token(key).await;
    }

    pub async fn has_api_key(&self) -> bool {
        self.rest.has_auth_token().await
    }

    fn swap_path(chain: ChainId, endpoint: &str) -> String {
        format!("/swap/{}/{}/{}", AGGREGATOR_API_VERSION, chain, endpoint)
    }

    fn history_path(chain: ChainId, endpoint: &str) -> String {
        format!("/history/{}/{}/{}", AGGREGATOR_API_VERSION, chain, endpoint)
    }

    // ── Swap API ─────────────────────────────────────────────────────────

    pub async fn get_quote(
        &self,
        chain: ChainId,
        params: &QuoteParams,
    ) -> Result<QuoteResponse, HttpError> {
        let url = self.rest.url(&Self::swap_path(chain, "quote"), Some(params))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_swap(
        &self,
        chain: ChainId,
        params: &SwapParams,
    ) -> Result<SwapResponse, HttpError> {
        let url = self.rest.url(&Self::swap_path(chain, "swap"), Some(params))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_tokens(&self, chain: ChainId) -> Result<TokensResponse, HttpError> {
        let url = self.rest.url::<()>(&Self::swap_path(chain, "tokens"), None)?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_liquidity_sources(
        &self,
        chain: ChainId,
    ) -> Result<LiquiditySourcesResponse, HttpError> {
        let url = self
            .rest
            .url::<()>(&Self::swap_path(chain, "liquidity-sources"), None)?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_spender(&self, chain: ChainId) -> Result<SpenderResponse, HttpError> {
        let url = self
            .rest
            .url::<()>(&Self::swap_path(chain, "approve/spender"), None)?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_approve_transaction(
        &self,
        chain: ChainId,
        token_address: &str,
        raw_amount: Option<u128>,
    ) -> Result<ApproveTransactionResponse, HttpError> {
        let query = ApproveTransactionQuery {
            token_address: token_address.to_string(),
            amount: raw_amount.map(|a| a.to_string()),
        };
        let url = self
            .rest
            .url(&Self::swap_path(chain, "approve/transaction"), Some(&query))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_allowance(
        &self,
        chain: ChainId,
        token_address: &str,
        wallet_address: &str,
    ) -> Result<AllowanceResponse, HttpError> {
        let query = AllowanceQuery {
            token_address: token_address.to_string(),
            wallet_address: wallet_address.to_string(),
        };
        let url = self
            .rest
            .url(&Self::swap_path(chain, "approve/allowance"), Some(&query))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    // ── History API ──────────────────────────────────────────────────────

    pub async fn get_history(
        &self,
        chain: ChainId,
        query: &HistoryQuery,
    ) -> Result<HistoryResponse, HttpError> {
        let url = self
            .rest
            .url(&Self::history_path(chain, "history"), Some(query))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_transaction_status(
        &self,
        chain: ChainId,
        hash: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let path = Self::history_path(
            chain,
            &format!("transaction/{}", urlencoding::encode(hash)),
        );
        let url = self.rest.url::<()>(&path, None)?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Fusion+ (cross-chain) ────────────────────────────────────────────

    pub async fn post_fusion_quote(
        &self,
        request: &FusionQuoteRequest,
    ) -> Result<FusionQuoteResponse, HttpError> {
        let url = self.rest.url::<()>("/fusion-plus/quote", None)?;
        self.rest.post(&url, request, RetryPolicy::None).await
    }

    pub async fn post_fusion_swap(
        &self,
        request: &FusionSwapRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.rest.url::<()>("/fusion-plus/swap", None)?;
        self.rest.post(&url, request, RetryPolicy::None).await
    }
}
