use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::journal::TradeRecord;
use crate::source::TradeSource;

/// A JSON array of trade rows on disk, e.g. a saved `/api/trades` response.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TradeSource for FileSource {
    async fn fetch_trades(&mut self) -> Result<Vec<TradeRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let records: Vec<TradeRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse trades in {}", self.path.display()))?;
        info!("Loaded {} trade records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
