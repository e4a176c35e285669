use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use fakerbot::{RecordStore, StoredProfile};

/// Store whose every call fails, as an unreachable database would.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn append(&self, _entry: &StoredProfile) -> Result<()> {
        bail!("connection refused")
    }

    async fn query(&self, _user_id: i64, _limit: Option<usize>) -> Result<Vec<StoredProfile>> {
        bail!("connection refused")
    }
}

/// Store that never answers within any reasonable deadline.
pub struct StalledStore;

#[async_trait]
impl RecordStore for StalledStore {
    async fn append(&self, _entry: &StoredProfile) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }

    async fn query(&self, _user_id: i64, _limit: Option<usize>) -> Result<Vec<StoredProfile>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Vec::new())
    }
}
