//! Control surface implemented by remote torrent services.

use async_trait::async_trait;

/// Asynchronous control service acting on a single torrent by id.
///
/// Calls carry no success payload; callers observe the effect through the next
/// telemetry snapshot. Failures carry no structured detail beyond the error.
#[async_trait]
pub trait ControlService: Send + Sync {
    /// Pause the torrent.
    async fn pause(&self, id: &str) -> anyhow::Result<()>;

    /// Resume a paused torrent.
    async fn resume(&self, id: &str) -> anyhow::Result<()>;

    /// Remove the torrent, optionally deleting its payload from disk.
    async fn remove(&self, id: &str, delete_files: bool) -> anyhow::Result<()>;

    /// Move the torrent into the named category; an empty name clears it.
    async fn set_category(&self, id: &str, name: &str) -> anyhow::Result<()>;
}
