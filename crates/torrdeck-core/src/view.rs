//! Display-ready bundle derived from a snapshot and its coordinator.

use serde::Serialize;
use torrdeck_model::TorrentSnapshot;

use crate::classify::{
    self, PeerStat, SpeedStat, added_label, category_label, downloaded_label, format_bytes,
    format_eta, format_rate, progress_label,
};
use crate::coordinator::{ActionKind, MutationCoordinator};
use crate::dispatch::ControlRequest;

/// Variant of the primary control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MainButton {
    /// Shown while the torrent is running.
    Pause,
    /// Shown while the torrent is paused.
    Resume,
}

impl MainButton {
    /// Request issued when the button is pressed.
    #[must_use]
    pub const fn request(self) -> ControlRequest {
        match self {
            Self::Pause => ControlRequest::Pause,
            Self::Resume => ControlRequest::Resume,
        }
    }
}

/// Everything the dashboard card renders for one torrent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TorrentView {
    /// Torrent identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Date added, `YYYY-MM-DD`.
    pub added: String,
    /// Payload size.
    pub size: String,
    /// Category name or placeholder.
    pub category: String,
    /// Whether a category change is awaiting confirmation.
    pub category_busy: bool,
    /// Whole-percent completion.
    pub progress: String,
    /// Downloaded bytes; absent once complete.
    pub downloaded: Option<String>,
    /// Clock-formatted ETA or the state label.
    pub eta: String,
    /// Whether the peer and speed counters are shown.
    pub stats_visible: bool,
    /// Peer counter.
    pub peers: PeerStat,
    /// Throughput counter.
    pub speed: SpeedStat,
    /// Formatted throughput.
    pub speed_label: String,
    /// Primary button variant.
    pub main_button: MainButton,
    /// Whether pause/resume/remove is awaiting confirmation.
    pub main_busy: bool,
}

impl TorrentView {
    /// Derive the view for the current snapshot and pending actions.
    #[must_use]
    pub fn build(snapshot: &TorrentSnapshot, coordinator: &MutationCoordinator) -> Self {
        let paused = classify::is_paused(snapshot);
        let speed = classify::speed_stat(snapshot);
        Self {
            id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            added: added_label(snapshot),
            size: format_bytes(snapshot.total_size),
            category: category_label(snapshot),
            category_busy: coordinator.is_pending(ActionKind::CategoryAction),
            progress: progress_label(snapshot),
            downloaded: downloaded_label(snapshot),
            eta: format_eta(snapshot),
            stats_visible: !paused,
            peers: classify::peer_stat(snapshot),
            speed,
            speed_label: format_rate(speed.bytes_per_sec),
            main_button: if paused {
                MainButton::Resume
            } else {
                MainButton::Pause
            },
            main_busy: coordinator.is_pending(ActionKind::MainAction),
        }
    }
}
