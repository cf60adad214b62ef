use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::{MatchStore, StoreError};
use crate::models::match_data::{MatchPayload, MatchRecord};

/// In-memory store. The original scoreboard kept its records in a
/// module-level array; here the same idea is an explicit object owned by the
/// composition root, so tests and ephemeral deployments share the handlers'
/// store seam.
#[derive(Default)]
pub struct InMemoryMatchStore {
    records: RwLock<Vec<MatchRecord>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<MatchRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn list(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<MatchRecord, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, payload: MatchPayload) -> Result<MatchRecord, StoreError> {
        let mut records = self.records.write().await;
        let record = MatchRecord::from_payload(Uuid::new_v4().to_string(), payload);
        records.push(record.clone());
        Ok(record)
    }

    async fn replace_by_id(
        &self,
        id: &str,
        payload: MatchPayload,
    ) -> Result<MatchRecord, StoreError> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound)?;
        let record = MatchRecord::from_payload(id.to_string(), payload);
        records[position] = record.clone();
        Ok(record)
    }

    async fn replace_all(&self, records: Vec<MatchRecord>) -> Result<(), StoreError> {
        *self.records.write().await = records;
        Ok(())
    }
}
