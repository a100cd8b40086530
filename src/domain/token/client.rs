//! Tokens sub-client: token lists (cached), search, favorites.

use crate::client::StellarealizeClient;
use crate::domain::token::convert::tokens_from_response;
use crate::domain::token::favorites::Favorites;
use crate::domain::token::registry::{filter_tokens, popular_tokens};
use crate::domain::token::Token;
use crate::error::SdkError;
use crate::shared::ChainId;

use std::time::Instant;

/// Sub-client for token discovery.
pub struct Tokens<'a> {
    pub(crate) client: &'a StellarealizeClient,
}

impl<'a> Tokens<'a> {
    /// Built-in list shown before anything is fetched.
    pub fn popular(&self) -> Vec<Token> {
        popular_tokens()
    }

    /// Aggregator token list for a chain (cached with TTL).
    ///
    /// The native ledger has no aggregator list; it gets the built-in
    /// Stellar tokens.
    pub async fn list(&self, chain: ChainId) -> Result<Vec<Token>, SdkError> {
        if chain.is_native() {
            return Ok(popular_tokens()
                .into_iter()
                .filter(|t| t.chain_id == chain)
                .collect());
        }

        {
            let cache = self.client.token_cache.read().await;
            if let Some((tokens, fetched_at)) = cache.get(&chain) {
                if fetched_at.elapsed() < self.client.token_cache_ttl {
                    return Ok(tokens.clone());
                }
            }
        }

        let resp = self.client.aggregator.get_tokens(chain).await?;
        let tokens = tokens_from_response(resp, chain);
        tracing::debug!(chain = %chain, count = tokens.len(), "Fetched token list");

        self.client
            .token_cache
            .write()
            .await
            .insert(chain, (tokens.clone(), Instant::now()));
        Ok(tokens)
    }

    /// Selector search across the built-in list.
    pub fn search(&self, term: &str, other_side: Option<&Token>) -> Vec<Token> {
        let tokens = popular_tokens();
        filter_tokens(&tokens, term, other_side)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Selector search across a chain's full list.
    pub async fn search_chain(
        &self,
        chain: ChainId,
        term: &str,
        other_side: Option<&Token>,
    ) -> Result<Vec<Token>, SdkError> {
        let tokens = self.list(chain).await?;
        Ok(filter_tokens(&tokens, term, other_side)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn favorites(&self) -> Result<Favorites, SdkError> {
        Favorites::load(self.client.store.as_ref())
    }

    /// Flip a token's favorite flag and persist. Returns the new flag.
    pub fn toggle_favorite(&self, address: &str) -> Result<bool, SdkError> {
        let store = self.client.store.as_ref();
        let mut favorites = Favorites::load(store)?;
        favorites.toggle_and_save(address, store)
    }

    pub async fn clear_cache(&self) {
        self.client.token_cache.write().await.clear();
    }
}
