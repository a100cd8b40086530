//! Quotes sub-client: one-shot quotes and debounced sessions.

use crate::client::StellarealizeClient;
use crate::domain::quote::{QuoteError, QuoteRequest, QuoteSelector, QuoteSession, SwapQuote};

/// Sub-client for swap quotes.
pub struct Quotes<'a> {
    pub(crate) client: &'a StellarealizeClient,
}

impl<'a> Quotes<'a> {
    /// Price a request right away, no debounce.
    pub async fn get(&self, request: &QuoteRequest) -> Result<SwapQuote, QuoteError> {
        QuoteSelector::new(self.client).quote(request).await
    }

    /// A quote session using the client's configured debounce.
    pub fn session(&self) -> QuoteSession<&'a StellarealizeClient> {
        QuoteSession::new(self.client).with_debounce(self.client.quote_debounce)
    }
}
