use std::io::{ErrorKind, SeekFrom};
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;

use super::{RecordStore, StoredProfile};

/// History kept as one JSON object per line.
///
/// Lines that fail to parse (a torn tail after a crash, say) are skipped
/// with a warning so one bad write never hides everyone's history.
pub struct JsonlRecordStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl JsonlRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<StoredProfile>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        let mut entries = Vec::new();
        for (index, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<StoredProfile>(line) {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::warn!(
                    file = %self.path.display(),
                    line = index + 1,
                    error = %err,
                    "Skipping malformed history line"
                ),
            }
        }
        Ok(entries)
    }
}

#[async_trait]
impl RecordStore for JsonlRecordStore {
    async fn append(&self, entry: &StoredProfile) -> Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let _guard = self.append_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        // Close off a torn last line so the new record starts on its own.
        if file.metadata().await?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1)).await?;
            file.read_exact(&mut last).await?;
            if last[0] != b'\n' {
                line.insert(0, '\n');
            }
        }
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn query(&self, user_id: i64, limit: Option<usize>) -> Result<Vec<StoredProfile>> {
        let mut entries: Vec<StoredProfile> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|entry| entry.user_id == user_id)
            .collect();
        // Reverse first so the stable sort leaves later insertions ahead on ties.
        entries.reverse();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }
}
