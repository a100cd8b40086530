//! Ledger sub-client: DEX orderbooks, path finding, network info, finality.

use crate::client::StellarealizeClient;
use crate::domain::ledger::wire::{OrderbookQuery, StrictSendPathsQuery, TransactionResponse};
use crate::domain::ledger::{is_valid_tx_hash, Asset, NetworkInfo, Orderbook, PaymentPath};
use crate::error::SdkError;

use rust_decimal::Decimal;

/// Sub-client for Horizon ledger reads.
pub struct Ledger<'a> {
    pub(crate) client: &'a StellarealizeClient,
}

impl<'a> Ledger<'a> {
    /// Current DEX book for `selling` against `buying`.
    pub async fn orderbook(
        &self,
        selling: &Asset,
        buying: &Asset,
        limit: Option<u32>,
    ) -> Result<Orderbook, SdkError> {
        let query = OrderbookQuery::new(selling, buying, limit);
        let resp = self.client.horizon.get_orderbook(&query).await?;
        Orderbook::try_from(resp).map_err(SdkError::Validation)
    }

    /// Latest ledger plus the configured network passphrase.
    pub async fn network_info(&self) -> Result<NetworkInfo, SdkError> {
        let page = self.client.horizon.get_latest_ledgers(1).await?;
        let record = page
            .into_records()
            .into_iter()
            .next()
            .ok_or_else(|| SdkError::Other("Horizon returned no ledgers".to_string()))?;
        Ok(NetworkInfo::from_ledger(
            record,
            self.client.network.passphrase(),
        ))
    }

    /// Strict-send paths from `amount` of `source` into any of `destinations`,
    /// best destination amount first.
    pub async fn strict_send_paths(
        &self,
        source: &Asset,
        amount: &Decimal,
        destinations: &[Asset],
    ) -> Result<Vec<PaymentPath>, SdkError> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }
        let query = StrictSendPathsQuery::new(source, &amount.normalize().to_string(), destinations);
        let page = self.client.horizon.get_strict_send_paths(&query).await?;

        let mut paths = page
            .into_records()
            .into_iter()
            .map(PaymentPath::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SdkError::Validation)?;
        paths.sort_by(|a, b| b.destination_amount.cmp(&a.destination_amount));
        Ok(paths)
    }

    /// Look up a transaction. `None` while Horizon has not ingested it.
    pub async fn transaction(&self, hash: &str) -> Result<Option<TransactionResponse>, SdkError> {
        if !is_valid_tx_hash(hash) {
            return Err(SdkError::Validation(format!(
                "Invalid transaction hash: {}",
                hash
            )));
        }
        match self.client.horizon.get_transaction(hash).await {
            Ok(tx) => Ok(Some(tx)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Poll until the transaction is final.
    ///
    /// Returns `true` once it is found and successful, `false` if it landed
    /// as failed or the poll window closed first. Lookup errors inside the
    /// window are treated as "not yet".
    pub async fn wait_for_transaction(&self, hash: &str) -> Result<bool, SdkError> {
        if !is_valid_tx_hash(hash) {
            return Err(SdkError::Validation(format!(
                "Invalid transaction hash: {}",
                hash
            )));
        }

        let poll = self.client.poll;
        let attempts = poll.max_attempts();

        for attempt in 0..attempts {
            match self.transaction(hash).await {
                Ok(Some(tx)) if tx.successful => {
                    tracing::debug!(hash, attempt, ledger = tx.ledger, "Transaction final");
                    return Ok(true);
                }
                Ok(Some(tx)) => {
                    tracing::warn!(hash, ledger = tx.ledger, "Transaction landed as failed");
                    return Ok(false);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(hash, attempt, error = %e, "Transaction lookup failed, retrying");
                }
            }

            if attempt + 1 < attempts {
                futures_timer::Delay::new(poll.interval).await;
            }
        }

        tracing::warn!(hash, timeout_ms = poll.timeout.as_millis() as u64, "Transaction wait timed out");
        Ok(false)
    }
}
