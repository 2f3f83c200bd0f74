//! Control requests and the dispatcher that issues them.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use torrdeck_model::ControlService;
use tracing::{debug, warn};

use crate::coordinator::{ActionKind, MutationCoordinator, Resolution, TaskOutcome};

/// Control action requested for a torrent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlRequest {
    /// Pause the torrent.
    Pause,
    /// Resume the torrent.
    Resume,
    /// Remove the torrent, optionally deleting payload data.
    Remove {
        /// Whether payload files should also be deleted.
        delete_files: bool,
    },
    /// Move the torrent into a category.
    SetCategory {
        /// Category name; empty clears the category.
        name: String,
    },
}

impl ControlRequest {
    /// Slot the request occupies while in flight.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Pause | Self::Resume | Self::Remove { .. } => ActionKind::MainAction,
            Self::SetCategory { .. } => ActionKind::CategoryAction,
        }
    }

    /// Operation identifier used in logs.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Remove { .. } => "remove",
            Self::SetCategory { .. } => "set_category",
        }
    }
}

type RemoteCall = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// In-flight remote call with exactly two outcomes.
///
/// The call is issued when the task is first polled. Awaiting [`DispatchTask::resolve`]
/// never fails; remote errors are logged and folded into [`TaskOutcome::Failed`].
#[must_use = "a dispatch task does nothing until it is awaited or spawned"]
pub struct DispatchTask {
    kind: ActionKind,
    operation: &'static str,
    torrent_id: String,
    call: RemoteCall,
}

impl DispatchTask {
    /// Slot the task was dispatched under.
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Operation identifier of the underlying request.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Drive the remote call to completion.
    pub async fn resolve(self) -> Resolution {
        let Self {
            kind,
            operation,
            torrent_id,
            call,
        } = self;
        let outcome = match call.await {
            Ok(()) => {
                debug!(operation, torrent_id = %torrent_id, "control request accepted");
                TaskOutcome::Succeeded
            }
            Err(err) => {
                warn!(
                    operation,
                    torrent_id = %torrent_id,
                    error = %err,
                    "control request failed"
                );
                TaskOutcome::Failed
            }
        };
        Resolution { kind, outcome }
    }
}

impl fmt::Debug for DispatchTask {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DispatchTask")
            .field("kind", &self.kind)
            .field("operation", &self.operation)
            .field("torrent_id", &self.torrent_id)
            .finish_non_exhaustive()
    }
}

/// Issues control requests and marks the owning coordinator pending.
///
/// The dispatcher neither retries nor serialises calls for the same torrent.
#[derive(Clone)]
pub struct ActionDispatcher {
    service: Arc<dyn ControlService>,
}

impl ActionDispatcher {
    /// Wrap a control service.
    #[must_use]
    pub fn new(service: Arc<dyn ControlService>) -> Self {
        Self { service }
    }

    /// Pause the torrent.
    pub fn pause(&self, coordinator: &mut MutationCoordinator, id: &str) -> DispatchTask {
        self.dispatch(coordinator, id, ControlRequest::Pause)
    }

    /// Resume the torrent.
    pub fn resume(&self, coordinator: &mut MutationCoordinator, id: &str) -> DispatchTask {
        self.dispatch(coordinator, id, ControlRequest::Resume)
    }

    /// Remove the torrent, optionally deleting its files.
    pub fn remove(
        &self,
        coordinator: &mut MutationCoordinator,
        id: &str,
        delete_files: bool,
    ) -> DispatchTask {
        self.dispatch(coordinator, id, ControlRequest::Remove { delete_files })
    }

    /// Move the torrent into the named category.
    pub fn set_category(
        &self,
        coordinator: &mut MutationCoordinator,
        id: &str,
        name: impl Into<String>,
    ) -> DispatchTask {
        self.dispatch(
            coordinator,
            id,
            ControlRequest::SetCategory { name: name.into() },
        )
    }

    /// Mark the request's slot pending and build the task issuing it.
    pub fn dispatch(
        &self,
        coordinator: &mut MutationCoordinator,
        id: &str,
        request: ControlRequest,
    ) -> DispatchTask {
        let kind = request.kind();
        let operation = request.operation();
        coordinator.dispatch_start(kind);

        let service = Arc::clone(&self.service);
        let target = id.to_string();
        let call: RemoteCall = Box::pin(async move {
            match request {
                ControlRequest::Pause => service.pause(&target).await,
                ControlRequest::Resume => service.resume(&target).await,
                ControlRequest::Remove { delete_files } => {
                    service.remove(&target, delete_files).await
                }
                ControlRequest::SetCategory { name } => service.set_category(&target, &name).await,
            }
        });

        DispatchTask {
            kind,
            operation,
            torrent_id: id.to_string(),
            call,
        }
    }
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ActionDispatcher")
            .finish_non_exhaustive()
    }
}
