//! Quote state containers: explicit state, generation tickets, debounce.

use super::selector::{QuoteBackend, QuoteSelector};
use super::{QuoteError, QuoteRequest, SwapQuote};
use crate::shared::parse_amount;

use async_lock::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

/// Default quiet period before a quote request goes out.
pub const DEFAULT_QUOTE_DEBOUNCE: Duration = Duration::from_millis(300);

/// What the swap form shows for the current input.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuoteState {
    /// No valid input, nothing to show.
    #[default]
    Absent,
    Loading,
    Ready(SwapQuote),
    /// User-facing failure message.
    Failed(String),
}

impl QuoteState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QuoteState::Loading)
    }

    pub fn quote(&self) -> Option<&SwapQuote> {
        match self {
            QuoteState::Ready(q) => Some(q),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QuoteState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The "to" amount field.
    pub fn output_amount(&self) -> Option<Decimal> {
        self.quote().map(|q| q.output_amount)
    }
}

/// Generation counter plus the state it guards.
///
/// Every new input takes a ticket. Only the holder of the latest ticket may
/// move the state, so a slow response for old input can never overwrite
/// the state of newer input.
#[derive(Debug, Default)]
pub struct QuoteTracker {
    generation: u64,
    state: QuoteState,
}

impl QuoteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuoteState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Supersede everything issued so far.
    pub fn next_ticket(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }

    /// Enter `Loading` if `ticket` is still current.
    pub fn mark_loading(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = QuoteState::Loading;
        true
    }

    /// Apply a response if `ticket` is still current. Errors collapse into
    /// the user-facing message.
    pub fn resolve(&mut self, ticket: u64, result: Result<SwapQuote, QuoteError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(quote) => QuoteState::Ready(quote),
            Err(e) => QuoteState::Failed(e.user_message().to_string()),
        };
        true
    }

    /// Back to `Absent`, superseding anything in flight.
    pub fn reset(&mut self) {
        self.next_ticket();
        self.state = QuoteState::Absent;
    }
}

/// Debounced, stale-safe quoting for one swap form.
///
/// Cloning shares the state.
pub struct QuoteSession<B> {
    backend: B,
    tracker: Arc<Mutex<QuoteTracker>>,
    debounce: Duration,
}

impl<B: QuoteBackend> QuoteSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tracker: Arc::new(Mutex::new(QuoteTracker::new())),
            debounce: DEFAULT_QUOTE_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub async fn state(&self) -> QuoteState {
        self.tracker.lock().await.state().clone()
    }

    pub async fn reset(&self) {
        self.tracker.lock().await.reset();
    }

    /// Feed new input.
    ///
    /// Returns the state this call settled on, or `None` if newer input
    /// superseded it (during the quiet period or while its request was in
    /// flight). Non-positive or unparsable amounts reset to `Absent`
    /// without issuing a request.
    pub async fn update(&self, request: QuoteRequest) -> Option<QuoteState> {
        let ticket = {
            let mut tracker = self.tracker.lock().await;
            if parse_amount(&request.amount).is_err() {
                tracker.reset();
                return Some(QuoteState::Absent);
            }
            tracker.next_ticket()
        };

        if !self.debounce.is_zero() {
            futures_timer::Delay::new(self.debounce).await;
        }

        if !self.tracker.lock().await.mark_loading(ticket) {
            tracing::debug!(ticket, "Quote input superseded before request");
            return None;
        }

        let result = QuoteSelector::new(&self.backend).quote(&request).await;
        if let Err(e) = &result {
            tracing::warn!(
                error = %e,
                from = %request.from,
                to = %request.to,
                "Quote failed"
            );
        }

        let mut tracker = self.tracker.lock().await;
        if tracker.resolve(ticket, result) {
            Some(tracker.state().clone())
        } else {
            tracing::debug!(ticket, current = tracker.generation(), "Discarding stale quote response");
            None
        }
    }

    /// Swap direction using the current output as the new input amount.
    pub async fn flip(&self, request: &QuoteRequest) -> QuoteRequest {
        let output = self.tracker.lock().await.state().output_amount();
        request.flipped(output)
    }
}

impl<B: Clone> Clone for QuoteSession<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            tracker: self.tracker.clone(),
            debounce: self.debounce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::{RouteHop, QUOTE_FAILED_MESSAGE};
    use crate::domain::token::registry;
    use crate::domain::ledger::{Asset, PaymentPath};
    use crate::domain::quote::wire::{
        FusionQuoteRequest, FusionQuoteResponse, QuoteParams, QuoteResponse,
    };
    use crate::error::SdkError;
    use crate::shared::{ChainId, SlippageTolerance};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and fails every one of them.
    #[derive(Default)]
    struct Offline {
        calls: AtomicUsize,
    }

    impl Offline {
        fn down(&self) -> SdkError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            SdkError::Other("offline".to_string())
        }
    }

    impl QuoteBackend for Offline {
        async fn same_chain_quote(
            &self,
            _chain: ChainId,
            _params: &QuoteParams,
        ) -> Result<QuoteResponse, SdkError> {
            Err(self.down())
        }

        async fn cross_chain_quote(
            &self,
            _request: &FusionQuoteRequest,
        ) -> Result<FusionQuoteResponse, SdkError> {
            Err(self.down())
        }

        async fn strict_send_paths(
            &self,
            _source: &Asset,
            _amount: &Decimal,
            _destinations: &[Asset],
        ) -> Result<Vec<PaymentPath>, SdkError> {
            Err(self.down())
        }
    }

    fn sample_quote() -> SwapQuote {
        SwapQuote {
            input_amount: Decimal::from(10),
            output_amount: Decimal::from(1),
            input_token: registry::xlm(),
            output_token: registry::eth(),
            price_impact: Decimal::new(1, 1),
            fee: "0.3%".to_string(),
            route: vec![RouteHop {
                protocol: "1inch Fusion+".to_string(),
                percentage: 100,
                from_token: registry::xlm(),
                to_token: registry::eth(),
            }],
            estimated_gas: None,
            slippage: SlippageTolerance::Half,
        }
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut tracker = QuoteTracker::new();
        let first = tracker.next_ticket();
        assert!(tracker.mark_loading(first));
        let second = tracker.next_ticket();

        assert!(!tracker.resolve(first, Ok(sample_quote())));
        assert!(tracker.state().is_loading());

        assert!(tracker.resolve(second, Err(QuoteError::NoPath)));
        assert_eq!(tracker.state().error(), Some(QUOTE_FAILED_MESSAGE));
    }

    #[test]
    fn test_reset_supersedes_in_flight() {
        let mut tracker = QuoteTracker::new();
        let ticket = tracker.next_ticket();
        tracker.mark_loading(ticket);
        tracker.reset();
        assert!(!tracker.resolve(ticket, Ok(sample_quote())));
        assert_eq!(tracker.state(), &QuoteState::Absent);
    }

    #[test]
    fn test_ready_state_accessors() {
        let state = QuoteState::Ready(sample_quote());
        assert_eq!(state.output_amount(), Some(Decimal::from(1)));
        assert!(state.error().is_none());
        assert!(!state.is_loading());
        assert_eq!(QuoteState::default(), QuoteState::Absent);
    }

    #[test]
    fn test_session_failure_then_blank_input() {
        let backend = Offline::default();
        let session = QuoteSession::new(&backend).with_debounce(Duration::ZERO);
        let request = QuoteRequest::new(registry::xlm(), registry::eth(), "5");

        let state = tokio_test::block_on(session.update(request.clone()));
        assert_eq!(state, Some(QuoteState::Failed(QUOTE_FAILED_MESSAGE.to_string())));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        let blank = QuoteRequest {
            amount: String::new(),
            ..request
        };
        assert_eq!(tokio_test::block_on(session.update(blank)), Some(QuoteState::Absent));
        assert_eq!(tokio_test::block_on(session.state()), QuoteState::Absent);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }
}
