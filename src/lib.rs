//! # Stellarealize SDK
//!
//! Client-side SDK for the Stellarealize DeFi dashboard: swap-quote
//! aggregation across the Stellar DEX and an EVM swap aggregator, Horizon
//! accounts, transaction history and display formatting.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Types, domain models, quote routing, formatting (always available, WASM-safe)
//! 2. **Storage**: Key-value seam for favorites and the wallet session
//! 3. **HTTP API**: `AggregatorHttp` and `HorizonHttp` over one retrying REST core
//! 4. **High-Level Client**: `StellarealizeClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stellarealize::prelude::*;
//!
//! let client = StellarealizeClient::builder()
//!     .network(StellarNetwork::Testnet)
//!     .api_key("...")
//!     .build()?;
//!
//! let request = QuoteRequest::new(registry::xlm(), usdc, "100");
//! let quote = client.quotes().get(&request).await?;
//!
//! let session = client.quotes().session();
//! if let Some(QuoteState::Ready(q)) = session.update(request).await {
//!     println!("{} {}", q.output_amount, q.output_token.symbol);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, amount scaling and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Persistent key-value storage.
pub mod storage;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP clients with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `StellarealizeClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AccountId, ChainId, SlippageTolerance};

    // Domain types: tokens
    pub use crate::domain::token::favorites::Favorites;
    pub use crate::domain::token::registry;
    pub use crate::domain::token::Token;

    // Domain types: quotes
    pub use crate::domain::quote::{
        ImpactSeverity, QuoteBackend, QuoteError, QuoteRequest, QuoteRoute, QuoteSelector,
        QuoteSession, QuoteState, RouteHop, SwapQuote,
    };

    // Domain types: swap, ledger, account, history
    pub use crate::domain::account::{AccountInfo, Balance, WalletSession};
    pub use crate::domain::history::{HistoryFilter, TransactionRecord, TxKind, TxStatus};
    pub use crate::domain::ledger::{Asset, NetworkInfo, Orderbook, PaymentPath};
    pub use crate::domain::swap::SwapPlan;

    // Errors
    pub use crate::error::{HttpError, SdkError, StorageError};

    // Network
    pub use crate::network::StellarNetwork;

    // Storage
    pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountsClient, HistoryClient, LedgerClient, QuotesClient, StellarealizeClient,
        StellarealizeClientBuilder, SwapsClient, TokensClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{PollConfig, RetryConfig, RetryPolicy};
}
