//! Accounts sub-client: Horizon accounts, testnet funding, wallet session.

use crate::client::StellarealizeClient;
use crate::domain::account::{AccountInfo, Balance, WalletSession};
use crate::domain::ledger::wire::FriendbotResponse;
use crate::error::SdkError;
use crate::shared::AccountId;

/// Sub-client for account reads and the connected-wallet session.
pub struct Accounts<'a> {
    pub(crate) client: &'a StellarealizeClient,
}

impl<'a> Accounts<'a> {
    /// Load an account. `None` if it does not exist (not yet funded).
    pub async fn get(&self, account_id: &str) -> Result<Option<AccountInfo>, SdkError> {
        let id = parse_account_id(account_id)?;
        match self.client.horizon.get_account(id.as_str()).await {
            Ok(resp) => AccountInfo::try_from(resp)
                .map(Some)
                .map_err(SdkError::Validation),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Balance lines; empty for a missing account.
    pub async fn balances(&self, account_id: &str) -> Result<Vec<Balance>, SdkError> {
        Ok(self
            .get(account_id)
            .await?
            .map(|info| info.balances)
            .unwrap_or_default())
    }

    /// Fund an account through friendbot. Testnet only; never retried.
    pub async fn fund_testnet(&self, account_id: &str) -> Result<FriendbotResponse, SdkError> {
        let id = parse_account_id(account_id)?;
        if !self.client.network.is_testnet() {
            return Err(SdkError::Validation(
                "Friendbot funding is only available on testnet".to_string(),
            ));
        }
        let resp = self.client.horizon.fund_account(id.as_str()).await?;
        tracing::info!(account = %id, hash = ?resp.hash, "Funded testnet account");
        Ok(resp)
    }

    // ── Wallet session ───────────────────────────────────────────────────

    /// Validate, load and remember an account as the connected wallet.
    pub async fn connect(&self, account_id: &str) -> Result<(WalletSession, AccountInfo), SdkError> {
        let id = parse_account_id(account_id)?;
        let info = self.get(id.as_str()).await?.ok_or_else(|| {
            SdkError::Validation(format!(
                "Account {} does not exist on {}",
                id,
                self.client.network.as_str()
            ))
        })?;

        let session = WalletSession::new(id, self.client.network);
        session.save(self.client.store.as_ref())?;
        tracing::info!(account = %session.account_id, network = %session.network, "Wallet connected");
        Ok((session, info))
    }

    /// Fund a fresh testnet account, then connect it.
    pub async fn fund_and_connect(
        &self,
        account_id: &str,
    ) -> Result<(WalletSession, AccountInfo), SdkError> {
        self.fund_testnet(account_id).await?;
        self.connect(account_id).await
    }

    /// Restore the stored session.
    ///
    /// A session saved for another network, or for an account that no
    /// longer loads, is dropped and `None` returned.
    pub async fn rehydrate(&self) -> Result<Option<(WalletSession, AccountInfo)>, SdkError> {
        let store = self.client.store.as_ref();
        let Some(session) = WalletSession::load(store)? else {
            return Ok(None);
        };

        if !session.is_for(self.client.network) {
            tracing::debug!(stored = %session.network, "Dropping wallet session for another network");
            WalletSession::clear(store)?;
            return Ok(None);
        }

        match self.get(session.account_id.as_str()).await? {
            Some(info) => Ok(Some((session, info))),
            None => {
                tracing::warn!(account = %session.account_id, "Stored wallet account no longer exists");
                WalletSession::clear(store)?;
                Ok(None)
            }
        }
    }

    /// Forget the connected wallet.
    pub async fn disconnect(&self) -> Result<(), SdkError> {
        WalletSession::clear(self.client.store.as_ref())?;
        tracing::info!("Wallet disconnected");
        Ok(())
    }

    /// The stored session without touching the network.
    pub fn current_session(&self) -> Result<Option<WalletSession>, SdkError> {
        WalletSession::load(self.client.store.as_ref())
    }
}

fn parse_account_id(account_id: &str) -> Result<AccountId, SdkError> {
    AccountId::parse(account_id).map_err(SdkError::Validation)
}
