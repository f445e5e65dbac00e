pub mod memory;

use thiserror::Error;

use crate::models::schema::Entity;
use crate::query::filter::{Filter, SortOrder};

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} record {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} record {key} already exists")]
    Duplicate { entity: &'static str, key: String },

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Change applied by a bulk update. Only the status column is ever written in
/// bulk; any other field a caller sends is dropped before it reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkChange {
    pub status: Option<String>,
}

impl BulkChange {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
    }
}

/// Persistence seam for one entity set, keyed by business key.
pub trait RecordStore<E: Entity>: Send + Sync {
    fn count(&self, filter: &Filter) -> Result<u64, StoreError>;

    fn find_many(
        &self,
        filter: &Filter,
        sort: &SortOrder,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<E>, StoreError>;

    fn insert(&self, record: E) -> Result<E, StoreError>;

    /// Inserts unless the key already exists; returns whether it inserted.
    fn insert_if_absent(&self, record: E) -> Result<bool, StoreError>;

    fn update(&self, key: &str, patch: E::Patch) -> Result<E, StoreError>;

    /// Returns how many of `keys` matched. An empty change still counts
    /// matches but leaves the records untouched.
    fn update_many(&self, keys: &[String], change: &BulkChange) -> Result<u64, StoreError>;

    fn delete(&self, key: &str) -> Result<E, StoreError>;

    fn delete_many(&self, keys: &[String]) -> Result<u64, StoreError>;
}
