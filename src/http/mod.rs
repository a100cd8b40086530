//! HTTP client layer: one REST core, one endpoint client per API.

pub mod aggregator;
pub mod client;
pub mod horizon;
pub mod retry;

pub use aggregator::AggregatorHttp;
pub use client::RestClient;
pub use horizon::HorizonHttp;
pub use retry::{PollConfig, RetryConfig, RetryPolicy};
