use crate::error::Result;
use crate::types::AlertSnapshot;
use async_trait::async_trait;

/// Retrieves the alert page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Persists a finished snapshot, replacing any previous one.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, snapshot: &AlertSnapshot) -> Result<()>;

    /// Human-readable destination, used in progress output.
    fn location(&self) -> String;
}
