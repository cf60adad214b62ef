use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::{MatchStore, StoreError};
use crate::models::match_data::{MatchPayload, MatchRecord};

/// JSON-file-backed store. Every mutation re-reads the whole file, applies
/// the change, and rewrites it through a temp file + rename so a crash can
/// never leave a half-written store behind. Mutating calls serialize on a
/// mutex; the original scoreboard let concurrent read-modify-writes race and
/// lose each other's updates.
pub struct FileMatchStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileMatchStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_records(&self) -> Result<Vec<MatchRecord>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            // No file yet means an empty store, not an error.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_records(&self, records: &[MatchRecord]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "matches.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl MatchStore for FileMatchStore {
    async fn list(&self) -> Result<Vec<MatchRecord>, StoreError> {
        self.read_records().await
    }

    async fn get_by_id(&self, id: &str) -> Result<MatchRecord, StoreError> {
        self.read_records()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, payload: MatchPayload) -> Result<MatchRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records().await?;
        let record = MatchRecord::from_payload(Uuid::new_v4().to_string(), payload);
        records.push(record.clone());
        self.write_records(&records).await?;
        Ok(record)
    }

    async fn replace_by_id(
        &self,
        id: &str,
        payload: MatchPayload,
    ) -> Result<MatchRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_records().await?;
        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound)?;
        let record = MatchRecord::from_payload(id.to_string(), payload);
        records[position] = record.clone();
        self.write_records(&records).await?;
        Ok(record)
    }

    async fn replace_all(&self, records: Vec<MatchRecord>) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_records(&records).await
    }
}
