//! Async facade over [`Storage`] for request handlers.
//!
//! Every call runs on the blocking pool and checks out its own connection.

use std::sync::Arc;

use laureates_core::{Address, Country, EntityId, Organization, Stored, Winner, WinnerView};
use laureates_storage::{Storage, StorageError, StoreStats};

use crate::ServiceError;
use crate::blocking::run_blocking;

pub struct QueryService {
    storage: Arc<Storage>,
}

impl QueryService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn create_winner(&self, winner: Winner) -> Result<Stored<Winner>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.insert_winner(&winner)).await
    }

    pub async fn list_winners(&self) -> Result<Vec<Stored<Winner>>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.list_winners()).await
    }

    /// Fetch one winner; a missing id is [`StorageError::NotFound`].
    pub async fn get_winner(&self, id: EntityId) -> Result<Stored<Winner>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || {
            storage.get_winner(id)?.ok_or_else(|| StorageError::not_found("winner", id))
        })
        .await
    }

    pub async fn create_address(&self, address: Address) -> Result<Stored<Address>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.insert_address(&address)).await
    }

    /// Fetch one address; a missing id is [`StorageError::NotFound`].
    pub async fn get_address(&self, id: EntityId) -> Result<Stored<Address>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || {
            storage.get_address(id)?.ok_or_else(|| StorageError::not_found("address", id))
        })
        .await
    }

    pub async fn list_addresses(&self) -> Result<Vec<Stored<Address>>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.list_addresses()).await
    }

    pub async fn create_organization(
        &self,
        organization: Organization,
    ) -> Result<Stored<Organization>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.insert_organization(&organization)).await
    }

    /// Fetch one organization; a missing id is [`StorageError::NotFound`].
    pub async fn get_organization(
        &self,
        id: EntityId,
    ) -> Result<Stored<Organization>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || {
            storage
                .get_organization(id)?
                .ok_or_else(|| StorageError::not_found("organization", id))
        })
        .await
    }

    pub async fn list_organizations(&self) -> Result<Vec<Stored<Organization>>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.list_organizations()).await
    }

    pub async fn winner_view(&self) -> Result<Vec<WinnerView>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.winner_view()).await
    }

    pub async fn distinct_countries(&self) -> Result<Vec<Country>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.distinct_countries()).await
    }

    pub async fn stats(&self) -> Result<StoreStats, ServiceError> {
        let storage = Arc::clone(&self.storage);
        run_blocking(move || storage.stats()).await
    }
}
