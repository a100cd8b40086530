//! Wallet session: the connected account id, persisted for rehydration.
//!
//! Only the public account id is stored. Secrets never touch the store.

use crate::error::{SdkError, StorageError};
use crate::network::StellarNetwork;
use crate::shared::AccountId;
use crate::storage::{KeyValueStore, WALLET_SESSION_KEY};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSession {
    pub account_id: AccountId,
    /// `testnet` or `mainnet`.
    pub network: String,
    pub connected_at: DateTime<Utc>,
}

impl WalletSession {
    pub fn new(account_id: AccountId, network: StellarNetwork) -> Self {
        Self {
            account_id,
            network: network.as_str().to_string(),
            connected_at: Utc::now(),
        }
    }

    pub fn is_for(&self, network: StellarNetwork) -> bool {
        self.network.parse::<StellarNetwork>() == Ok(network)
    }

    pub fn explorer_url(&self) -> Option<String> {
        self.network
            .parse::<StellarNetwork>()
            .ok()
            .map(|n| n.account_explorer_url(self.account_id.as_str()))
    }

    /// The stored session, if any.
    pub fn load(store: &dyn KeyValueStore) -> Result<Option<Self>, SdkError> {
        let Some(raw) = store.get(WALLET_SESSION_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            StorageError::Corrupt {
                key: WALLET_SESSION_KEY.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), SdkError> {
        store.set(WALLET_SESSION_KEY, &serde_json::to_string(self)?)?;
        Ok(())
    }

    pub fn clear(store: &dyn KeyValueStore) -> Result<(), SdkError> {
        store.remove(WALLET_SESSION_KEY)?;
        Ok(())
    }
}
