//! Favorite tokens: an ordered address list persisted as a JSON array.

use crate::error::{SdkError, StorageError};
use crate::storage::{KeyValueStore, FAVORITES_KEY};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    addresses: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the store. Missing key means no favorites.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, SdkError> {
        match store.get(FAVORITES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                StorageError::Corrupt {
                    key: FAVORITES_KEY.to_string(),
                    reason: e.to_string(),
                }
                .into()
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), SdkError> {
        let raw = serde_json::to_string(self)?;
        store.set(FAVORITES_KEY, &raw)?;
        Ok(())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.addresses.iter().any(|a| a == address)
    }

    /// Remove the address if present, otherwise append it.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, address: &str) -> bool {
        if let Some(pos) = self.addresses.iter().position(|a| a == address) {
            self.addresses.remove(pos);
            false
        } else {
            self.addresses.push(address.to_string());
            true
        }
    }

    /// Toggle and persist in one step.
    pub fn toggle_and_save(
        &mut self,
        address: &str,
        store: &dyn KeyValueStore,
    ) -> Result<bool, SdkError> {
        let now_favorite = self.toggle(address);
        self.save(store)?;
        Ok(now_favorite)
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
