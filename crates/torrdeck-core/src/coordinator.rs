//! Optimistic pending-action tracking for a single torrent.
//!
//! # Design
//! - Two independent slots so a category change never blocks pause/resume.
//! - Success is inferred only from a later snapshot whose state or category differs;
//!   remote failure clears the slot immediately.
//! - A successful no-op (pausing an already paused torrent) leaves its slot pending
//!   until some later state or category change. This is accepted, not repaired.

use serde::Serialize;
use torrdeck_model::TorrentSnapshot;
use tracing::debug;

/// Action slot tracked by the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Pause, resume, and remove.
    MainAction,
    /// Category changes.
    CategoryAction,
}

impl ActionKind {
    /// Both slots, in display order.
    pub const ALL: [Self; 2] = [Self::MainAction, Self::CategoryAction];

    /// Stable label used in structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainAction => "main",
            Self::CategoryAction => "category",
        }
    }
}

/// State of one action slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A request was issued and its effect has not been observed yet.
    Pending,
}

/// Outcome of a dispatched remote call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The service accepted the request.
    Succeeded,
    /// The service or transport rejected the request.
    Failed,
}

/// Resolved task routed back to the owning coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Slot the task was dispatched under.
    pub kind: ActionKind,
    /// How the remote call ended.
    pub outcome: TaskOutcome,
}

/// Per-torrent state machine with one slot per [`ActionKind`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationCoordinator {
    main: SlotState,
    category: SlotState,
}

impl MutationCoordinator {
    /// Fresh coordinator with both slots idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            main: SlotState::Idle,
            category: SlotState::Idle,
        }
    }

    /// Current state of a slot.
    #[must_use]
    pub const fn state(&self, kind: ActionKind) -> SlotState {
        match kind {
            ActionKind::MainAction => self.main,
            ActionKind::CategoryAction => self.category,
        }
    }

    /// Whether the slot has a request in flight.
    #[must_use]
    pub const fn is_pending(&self, kind: ActionKind) -> bool {
        matches!(self.state(kind), SlotState::Pending)
    }

    /// Whether both slots are idle.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.is_pending(ActionKind::MainAction) && !self.is_pending(ActionKind::CategoryAction)
    }

    /// Mark the slot pending; the other slot is untouched.
    pub fn dispatch_start(&mut self, kind: ActionKind) {
        debug!(slot = kind.as_str(), "action dispatched");
        *self.slot_mut(kind) = SlotState::Pending;
    }

    /// Clear the slot after a remote failure.
    pub fn dispatch_failed(&mut self, kind: ActionKind) {
        debug!(slot = kind.as_str(), "action failed; slot cleared");
        *self.slot_mut(kind) = SlotState::Idle;
    }

    /// Reset both slots when state or category changed between snapshots.
    ///
    /// Returns `true` when the reset applied.
    pub fn on_snapshot_changed(&mut self, old: &TorrentSnapshot, new: &TorrentSnapshot) -> bool {
        if old.state == new.state && old.category == new.category {
            return false;
        }
        if !self.is_idle() {
            debug!(
                from = %old.state,
                to = %new.state,
                "snapshot changed; pending actions settled"
            );
        }
        self.main = SlotState::Idle;
        self.category = SlotState::Idle;
        true
    }

    /// Apply a resolved task. Success is left for the next snapshot to confirm.
    pub fn resolve(&mut self, resolution: Resolution) {
        match resolution.outcome {
            TaskOutcome::Failed => self.dispatch_failed(resolution.kind),
            TaskOutcome::Succeeded => {
                debug!(
                    slot = resolution.kind.as_str(),
                    "action accepted; awaiting telemetry"
                );
            }
        }
    }

    fn slot_mut(&mut self, kind: ActionKind) -> &mut SlotState {
        match kind {
            ActionKind::MainAction => &mut self.main,
            ActionKind::CategoryAction => &mut self.category,
        }
    }
}
