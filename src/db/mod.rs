use async_trait::async_trait;
use thiserror::Error;

use crate::models::match_data::{MatchPayload, MatchRecord};

pub mod file_store;
pub mod memory_store;

pub use file_store::FileMatchStore;
pub use memory_store::InMemoryMatchStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("match not found")]
    NotFound,

    #[error("failed to read or write match data: {0}")]
    Io(#[from] std::io::Error),

    #[error("match data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence seam for match records. The engine and validation never touch
/// storage directly; handlers go through this trait so the file-backed store
/// and the in-memory store are interchangeable.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn list(&self) -> Result<Vec<MatchRecord>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<MatchRecord, StoreError>;

    /// Insert a new match, assigning a fresh unique id.
    async fn insert(&self, payload: MatchPayload) -> Result<MatchRecord, StoreError>;

    /// Replace every field of an existing match, keeping its id.
    async fn replace_by_id(&self, id: &str, payload: MatchPayload)
        -> Result<MatchRecord, StoreError>;

    /// Wholesale overwrite of the collection (bulk import).
    async fn replace_all(&self, records: Vec<MatchRecord>) -> Result<(), StoreError>;
}
