//! High-level client: `StellarealizeClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::account::client::Accounts;
use crate::domain::history::client::History;
use crate::domain::ledger::client::Ledger;
use crate::domain::ledger::{Asset, PaymentPath};
use crate::domain::quote::client::Quotes;
use crate::domain::quote::state::DEFAULT_QUOTE_DEBOUNCE;
use crate::domain::quote::wire::{
    FusionQuoteRequest, FusionQuoteResponse, QuoteParams, QuoteResponse,
};
use crate::domain::quote::QuoteBackend;
use crate::domain::swap::client::Swaps;
use crate::domain::token::client::Tokens;
use crate::domain::token::Token;
use crate::error::SdkError;
use crate::http::{AggregatorHttp, HorizonHttp, PollConfig, RetryConfig};
use crate::network::StellarNetwork;
use crate::shared::ChainId;
use crate::storage::{KeyValueStore, MemoryStore};

use async_lock::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::ledger::client::Ledger as LedgerClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::swap::client::Swaps as SwapsClient;
pub use crate::domain::token::client::Tokens as TokensClient;

/// Environment variable holding the aggregator API key.
pub const ENV_API_KEY: &str = "ONE_INCH_API_KEY";
/// `testnet` or `mainnet`.
pub const ENV_NETWORK: &str = "STELLAR_NETWORK";
pub const ENV_HORIZON_URL: &str = "HORIZON_URL";
pub const ENV_AGGREGATOR_URL: &str = "AGGREGATOR_URL";

/// The primary entry point for the Stellarealize SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.quotes()`, `client.accounts()`, etc.
pub struct StellarealizeClient {
    pub(crate) aggregator: AggregatorHttp,
    pub(crate) horizon: HorizonHttp,
    pub(crate) network: StellarNetwork,
    pub(crate) poll: PollConfig,
    pub(crate) quote_debounce: Duration,
    /// Token list cache: chain → (tokens, fetched_at)
    pub(crate) token_cache: Arc<RwLock<HashMap<ChainId, (Vec<Token>, Instant)>>>,
    /// Cache TTL for token lists
    pub(crate) token_cache_ttl: Duration,
    /// Favorites and wallet session.
    pub(crate) store: Arc<dyn KeyValueStore>,
}

impl StellarealizeClient {
    pub fn builder() -> StellarealizeClientBuilder {
        StellarealizeClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn swaps(&self) -> Swaps<'_> {
        Swaps { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn ledger(&self) -> Ledger<'_> {
        Ledger { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    // ── Configuration ────────────────────────────────────────────────────

    pub fn network(&self) -> StellarNetwork {
        self.network
    }

    pub fn poll_config(&self) -> PollConfig {
        self.poll
    }

    pub fn quote_debounce(&self) -> Duration {
        self.quote_debounce
    }

    /// Replace or clear the aggregator API key at runtime.
    pub async fn set_api_key(&self, key: Option<String>) {
        self.aggregator.set_api_key(key).await;
    }

    pub async fn has_api_key(&self) -> bool {
        self.aggregator.has_api_key().await
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.token_cache.write().await.clear();
    }
}

impl Clone for StellarealizeClient {
    fn clone(&self) -> Self {
        Self {
            aggregator: self.aggregator.clone(),
            horizon: self.horizon.clone(),
            network: self.network,
            poll: self.poll,
            quote_debounce: self.quote_debounce,
            token_cache: self.token_cache.clone(),
            token_cache_ttl: self.token_cache_ttl,
            store: self.store.clone(),
        }
    }
}

impl QuoteBackend for StellarealizeClient {
    async fn same_chain_quote(
        &self,
        chain: ChainId,
        params: &QuoteParams,
    ) -> Result<QuoteResponse, SdkError> {
        Ok(self.aggregator.get_quote(chain, params).await?)
    }

    async fn cross_chain_quote(
        &self,
        request: &FusionQuoteRequest,
    ) -> Result<FusionQuoteResponse, SdkError> {
        Ok(self.aggregator.post_fusion_quote(request).await?)
    }

    async fn strict_send_paths(
        &self,
        source: &Asset,
        amount: &Decimal,
        destinations: &[Asset],
    ) -> Result<Vec<PaymentPath>, SdkError> {
        self.ledger()
            .strict_send_paths(source, amount, destinations)
            .await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StellarealizeClientBuilder {
    aggregator_url: String,
    api_key: Option<String>,
    network: StellarNetwork,
    horizon_url: Option<String>,
    friendbot_url: Option<String>,
    quote_debounce: Duration,
    token_cache_ttl: Duration,
    retry: Option<RetryConfig>,
    poll: PollConfig,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl Default for StellarealizeClientBuilder {
    fn default() -> Self {
        Self {
            aggregator_url: crate::network::DEFAULT_AGGREGATOR_URL.to_string(),
            api_key: None,
            network: StellarNetwork::default(),
            horizon_url: None,
            friendbot_url: None,
            quote_debounce: DEFAULT_QUOTE_DEBOUNCE,
            token_cache_ttl: Duration::from_secs(300),
            retry: None,
            poll: PollConfig::default(),
            store: None,
        }
    }
}

impl StellarealizeClientBuilder {
    /// Builder seeded from the process environment.
    ///
    /// Unset variables keep their defaults; an unknown network name is an
    /// error.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();

        if let Some(key) = env_var(ENV_API_KEY) {
            builder = builder.api_key(&key);
        }
        if let Some(name) = env_var(ENV_NETWORK) {
            let network = name.parse::<StellarNetwork>().map_err(|_| {
                SdkError::Validation(format!("Unknown {}: {}", ENV_NETWORK, name))
            })?;
            builder = builder.network(network);
        }
        if let Some(url) = env_var(ENV_HORIZON_URL) {
            builder = builder.horizon_url(&url);
        }
        if let Some(url) = env_var(ENV_AGGREGATOR_URL) {
            builder = builder.aggregator_url(&url);
        }
        Ok(builder)
    }

    pub fn aggregator_url(mut self, url: &str) -> Self {
        self.aggregator_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Selects the Horizon URL, passphrase and friendbot unless overridden.
    pub fn network(mut self, network: StellarNetwork) -> Self {
        self.network = network;
        self
    }

    pub fn horizon_url(mut self, url: &str) -> Self {
        self.horizon_url = Some(url.to_string());
        self
    }

    pub fn friendbot_url(mut self, url: &str) -> Self {
        self.friendbot_url = Some(url.to_string());
        self
    }

    pub fn quote_debounce(mut self, debounce: Duration) -> Self {
        self.quote_debounce = debounce;
        self
    }

    pub fn token_cache_ttl(mut self, ttl: Duration) -> Self {
        self.token_cache_ttl = ttl;
        self
    }

    /// Retry config for idempotent requests on both APIs.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    pub fn poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<StellarealizeClient, SdkError> {
        let horizon_url = self
            .horizon_url
            .unwrap_or_else(|| self.network.horizon_url().to_string());
        let friendbot_url = self
            .friendbot_url
            .or_else(|| self.network.friendbot_url().map(str::to_string));

        let mut aggregator =
            AggregatorHttp::new(&self.aggregator_url)?.with_api_key(self.api_key);
        let mut horizon = HorizonHttp::new(&horizon_url, friendbot_url.as_deref())?;
        if let Some(retry) = self.retry {
            aggregator = aggregator.with_idempotent_retry(retry.clone());
            horizon = horizon.with_idempotent_retry(retry);
        }

        tracing::debug!(
            network = self.network.as_str(),
            horizon = %horizon_url,
            aggregator = %self.aggregator_url,
            "Built Stellarealize client"
        );

        Ok(StellarealizeClient {
            aggregator,
            horizon,
            network: self.network,
            poll: self.poll,
            quote_debounce: self.quote_debounce,
            token_cache: Arc::new(RwLock::new(HashMap::new())),
            token_cache_ttl: self.token_cache_ttl,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryStore::new())),
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
