//! History sub-client: aggregator transaction history.

use crate::client::StellarealizeClient;
use crate::domain::history::wire::HistoryQuery;
use crate::domain::history::TransactionRecord;
use crate::error::SdkError;
use crate::shared::ChainId;

/// Sub-client for wallet activity on aggregator chains.
pub struct History<'a> {
    pub(crate) client: &'a StellarealizeClient,
}

impl<'a> History<'a> {
    /// First page (100 items) of history for `address`.
    pub async fn transactions(
        &self,
        chain: ChainId,
        address: &str,
    ) -> Result<Vec<TransactionRecord>, SdkError> {
        self.transactions_page(chain, &HistoryQuery::new(address))
            .await
    }

    pub async fn transactions_page(
        &self,
        chain: ChainId,
        query: &HistoryQuery,
    ) -> Result<Vec<TransactionRecord>, SdkError> {
        let resp = self.client.aggregator.get_history(chain, query).await?;

        let mut records = Vec::with_capacity(resp.items.len());
        for item in resp.items {
            let id = item.id.clone();
            match TransactionRecord::from_history_item(item, chain) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(id = %id, error = %e, "Skipping unreadable history item"),
            }
        }
        Ok(records)
    }

    /// Raw status document for one transaction.
    pub async fn transaction_status(
        &self,
        chain: ChainId,
        hash: &str,
    ) -> Result<serde_json::Value, SdkError> {
        Ok(self
            .client
            .aggregator
            .get_transaction_status(chain, hash)
            .await?)
    }
}
