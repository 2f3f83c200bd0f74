//! Pure classification helpers over a single telemetry snapshot.
//!
//! # Design
//! - Every answer is a function of the snapshot alone; no timers or side channels.
//! - Formatting lives in `format.rs`, the state label table in `labels.rs`.

mod format;
mod labels;

pub use format::{
    added_label, category_label, downloaded_label, format_bytes, format_duration, format_rate,
    progress_label,
};
pub use labels::{StateLabel, state_label};

use serde::Serialize;
use torrdeck_model::{TorrentSnapshot, TorrentState};

/// Peer counter shown beside the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PeerStat {
    /// Seeds while downloading, leechers once complete, otherwise zero.
    pub count: u32,
    /// Whether the counter is highlighted.
    pub lit: bool,
}

/// Throughput counter shown beside the peer counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpeedStat {
    /// Upload speed once complete, download speed otherwise, zero when paused.
    pub bytes_per_sec: u64,
    /// Whether the counter is highlighted.
    pub lit: bool,
}

/// Whether the payload has been fully downloaded.
#[must_use]
pub fn is_complete(snapshot: &TorrentSnapshot) -> bool {
    snapshot.progress >= 1.0
}

/// Whether the torrent is paused, before or after completion.
#[must_use]
pub const fn is_paused(snapshot: &TorrentSnapshot) -> bool {
    matches!(
        snapshot.state,
        TorrentState::PausedDl | TorrentState::PausedUp
    )
}

/// Whether the torrent is in one of the download-side working states.
#[must_use]
pub const fn is_actively_downloading(snapshot: &TorrentSnapshot) -> bool {
    matches!(
        snapshot.state,
        TorrentState::Downloading
            | TorrentState::MetaDl
            | TorrentState::QueuedDl
            | TorrentState::StalledDl
            | TorrentState::CheckingDl
            | TorrentState::ForcedDl
            | TorrentState::CheckingResumeData
            | TorrentState::Allocating
    )
}

/// ETA text: `HH:MM:SS` when estimated, the short state label otherwise.
#[must_use]
pub fn format_eta(snapshot: &TorrentSnapshot) -> String {
    if snapshot.has_eta() {
        format_duration(snapshot.eta)
    } else {
        state_label(snapshot.state).short.to_string()
    }
}

/// Peer counter to display for the snapshot.
#[must_use]
pub fn peer_stat(snapshot: &TorrentSnapshot) -> PeerStat {
    let count = if is_paused(snapshot) {
        0
    } else if is_actively_downloading(snapshot) {
        snapshot.num_seeds
    } else if is_complete(snapshot) {
        snapshot.num_leechs
    } else {
        0
    };
    PeerStat {
        count,
        lit: count > 0,
    }
}

/// Throughput counter to display for the snapshot.
#[must_use]
pub fn speed_stat(snapshot: &TorrentSnapshot) -> SpeedStat {
    let bytes_per_sec = if is_paused(snapshot) {
        0
    } else if is_complete(snapshot) {
        snapshot.upspeed
    } else {
        snapshot.dlspeed
    };
    SpeedStat {
        bytes_per_sec,
        lit: bytes_per_sec > 0,
    }
}
