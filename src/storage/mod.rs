//! Profile history persistence.

pub mod jsonl;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profiles::ProfileRecord;

pub use jsonl::JsonlRecordStore;

/// One history entry: a profile plus who asked for it and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub record_id: Uuid,
    pub user_id: i64,
    pub username: Option<String>,
    pub details: ProfileRecord,
    pub timestamp: DateTime<Utc>,
}

impl StoredProfile {
    pub fn new(user_id: i64, username: Option<String>, details: ProfileRecord) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            user_id,
            username,
            details,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only history of generated profiles.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append(&self, entry: &StoredProfile) -> anyhow::Result<()>;

    /// Entries for `user_id`, newest first; equal timestamps keep the later
    /// insertion first. `None` returns the full history.
    async fn query(&self, user_id: i64, limit: Option<usize>)
        -> anyhow::Result<Vec<StoredProfile>>;
}
