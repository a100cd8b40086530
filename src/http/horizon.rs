//! `HorizonHttp`: Stellar Horizon endpoints plus friendbot funding.

use crate::domain::account::wire::AccountResponse;
use crate::domain::ledger::wire::{
    FriendbotResponse, LedgerRecord, OrderbookQuery, OrderbookResponse, Page, PathRecord,
    StrictSendPathsQuery, TransactionResponse,
};
use crate::error::HttpError;
use crate::http::client::RestClient;
use crate::http::retry::{RetryConfig, RetryPolicy};

use serde::Serialize;

#[derive(Serialize)]
struct LedgersQuery {
    order: &'static str,
    limit: u32,
}

#[derive(Serialize)]
struct FriendbotQuery<'a> {
    addr: &'a str,
}

/// Low-level Horizon client.
#[derive(Clone)]
pub struct HorizonHttp {
    rest: RestClient,
    friendbot: Option<RestClient>,
}

impl HorizonHttp {
    pub fn new(horizon_url: &str, friendbot_url: Option<&str>) -> Result<Self, HttpError> {
        Ok(Self {
            rest: RestClient::new(horizon_url)?,
            friendbot: friendbot_url.map(RestClient::new).transpose()?,
        })
    }

    pub fn with_idempotent_retry(mut self, config: RetryConfig) -> Self {
        self.rest = self.rest.with_idempotent_retry(config);
        self
    }

    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    pub fn has_friendbot(&self) -> bool {
        self.friendbot.is_some()
    }

    pub async fn get_account(&self, account_id: &str) -> Result<AccountResponse, HttpError> {
        let path = format!("/accounts/{}", urlencoding::encode(account_id));
        let url = self.rest.url::<()>(&path, None)?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_orderbook(
        &self,
        query: &OrderbookQuery,
    ) -> Result<OrderbookResponse, HttpError> {
        let url = self.rest.url("/order_book", Some(query))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_strict_send_paths(
        &self,
        query: &StrictSendPathsQuery,
    ) -> Result<Page<PathRecord>, HttpError> {
        let url = self.rest.url("/paths/strict-send", Some(query))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    /// Most recent ledgers, newest first.
    pub async fn get_latest_ledgers(&self, limit: u32) -> Result<Page<LedgerRecord>, HttpError> {
        let query = LedgersQuery {
            order: "desc",
            limit,
        };
        let url = self.rest.url("/ledgers", Some(&query))?;
        self.rest.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_transaction(&self, hash: &str) -> Result<TransactionResponse, HttpError> {
        let path = format!("/transactions/{}", urlencoding::encode(hash));
        let url = self.rest.url::<()>(&path, None)?;
        // Polling owns the retry cadence.
        self.rest.get(&url, RetryPolicy::None).await
    }

    /// Ask friendbot to fund `account_id`. Not retried: a second call
    /// after a slow success fails with "already funded".
    pub async fn fund_account(&self, account_id: &str) -> Result<FriendbotResponse, HttpError> {
        let friendbot = self
            .friendbot
            .as_ref()
            .ok_or_else(|| HttpError::BadRequest("No friendbot configured".to_string()))?;
        let url = friendbot.url("", Some(&FriendbotQuery { addr: account_id }))?;
        friendbot.get(&url, RetryPolicy::None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendbot_only_when_configured() {
        let testnet = HorizonHttp::new(
            crate::network::HORIZON_TESTNET_URL,
            Some(crate::network::FRIENDBOT_URL),
        )
        .unwrap();
        assert!(testnet.has_friendbot());

        let mainnet = HorizonHttp::new(crate::network::HORIZON_MAINNET_URL, None).unwrap();
        assert!(!mainnet.has_friendbot());
        assert_eq!(mainnet.base_url(), "https://horizon.stellar.org");
    }

    #[tokio::test]
    async fn test_fund_without_friendbot_is_rejected() {
        let mainnet = HorizonHttp::new(crate::network::HORIZON_MAINNET_URL, None).unwrap();
        let err = mainnet
            .fund_account("GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN")
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }
}
