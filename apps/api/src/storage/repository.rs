//! `JobAnalysis` records on top of a `KvStore`, one JSON document per key.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{KvStore, StorageError};
use crate::models::analysis::JobAnalysis;

pub const KEY_PREFIX: &str = "job_analysis:";

#[derive(Clone)]
pub struct AnalysisRepository {
    store: Arc<dyn KvStore>,
}

impl AnalysisRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }

    pub async fn save(&self, analysis: &JobAnalysis) -> Result<(), StorageError> {
        let json = serde_json::to_string(analysis)?;
        if !self.store.set(&Self::key(&analysis.id), &json).await? {
            return Err(StorageError::Backend(format!(
                "store rejected write for {}",
                analysis.id
            )));
        }
        debug!(id = %analysis.id, bytes = json.len(), "analysis saved");
        Ok(())
    }

    pub async fn load(&self, id: &str) -> Result<Option<JobAnalysis>, StorageError> {
        let key = Self::key(id);
        match self.store.get(&key).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|source| StorageError::Corrupt { key, source }),
            None => Ok(None),
        }
    }

    /// Every stored analysis, most recent first. Records that no longer decode are skipped.
    pub async fn list(&self) -> Result<Vec<JobAnalysis>, StorageError> {
        let keys = self.store.list(&format!("{KEY_PREFIX}*")).await?;
        let mut analyses = Vec::with_capacity(keys.len());

        for key in keys {
            let Some(json) = self.store.get(&key).await? else {
                // Deleted between list and get.
                continue;
            };
            match serde_json::from_str::<JobAnalysis>(&json) {
                Ok(analysis) => analyses.push(analysis),
                Err(e) => warn!(%key, error = %e, "skipping undecodable analysis"),
            }
        }

        analyses.sort_by(|a, b| b.analysis_date.cmp(&a.analysis_date));
        Ok(analyses)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        self.store.delete(&Self::key(id)).await
    }

    /// Removes every analysis record. Returns how many were deleted.
    pub async fn wipe(&self) -> Result<usize, StorageError> {
        let keys = self.store.list(&format!("{KEY_PREFIX}*")).await?;
        let mut deleted = 0;
        for key in keys {
            if self.store.delete(&key).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}
