//! Telemetry snapshot types shared across the workspace.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Reserved `eta` value meaning no time estimate is available (100 days).
pub const ETA_SENTINEL: u64 = 8_640_000;

/// Closed set of states a telemetry source may report for a torrent.
///
/// Parsing rejects anything outside this set; see [`ModelError::UnknownState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TorrentState {
    /// Engine reported an error for the torrent.
    #[serde(rename = "error")]
    Errored,
    /// Payload files are missing on disk.
    #[serde(rename = "missingFiles")]
    MissingFiles,
    /// Seeding with active uploads.
    #[serde(rename = "uploading")]
    Uploading,
    /// Paused after completion.
    #[serde(rename = "pausedUP")]
    PausedUp,
    /// Queued for seeding.
    #[serde(rename = "queuedUP")]
    QueuedUp,
    /// Seeding without connected leechers.
    #[serde(rename = "stalledUP")]
    StalledUp,
    /// Checking data after completion.
    #[serde(rename = "checkingUP")]
    CheckingUp,
    /// Forced seeding, bypassing the queue.
    #[serde(rename = "forcedUP")]
    ForcedUp,
    /// Allocating disk space.
    #[serde(rename = "allocating")]
    Allocating,
    /// Downloading payload.
    #[serde(rename = "downloading")]
    Downloading,
    /// Fetching metadata from peers.
    #[serde(rename = "metaDL")]
    MetaDl,
    /// Paused before completion.
    #[serde(rename = "pausedDL")]
    PausedDl,
    /// Queued for download.
    #[serde(rename = "queuedDL")]
    QueuedDl,
    /// Downloading without connected seeds.
    #[serde(rename = "stalledDL")]
    StalledDl,
    /// Checking data before completion.
    #[serde(rename = "checkingDL")]
    CheckingDl,
    /// Forced download, bypassing the queue.
    #[serde(rename = "forcedDL")]
    ForcedDl,
    /// Checking fast-resume data on startup.
    #[serde(rename = "checkingResumeData")]
    CheckingResumeData,
    /// Moving payload to a new location.
    #[serde(rename = "moving")]
    Moving,
    /// Engine could not determine the state.
    #[serde(rename = "unknown")]
    Unknown,
}

impl TorrentState {
    /// Every member of the state set, in wire order.
    pub const ALL: [Self; 19] = [
        Self::Errored,
        Self::MissingFiles,
        Self::Uploading,
        Self::PausedUp,
        Self::QueuedUp,
        Self::StalledUp,
        Self::CheckingUp,
        Self::ForcedUp,
        Self::Allocating,
        Self::Downloading,
        Self::MetaDl,
        Self::PausedDl,
        Self::QueuedDl,
        Self::StalledDl,
        Self::CheckingDl,
        Self::ForcedDl,
        Self::CheckingResumeData,
        Self::Moving,
        Self::Unknown,
    ];

    /// Wire name as reported by the qBittorrent WebAPI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Errored => "error",
            Self::MissingFiles => "missingFiles",
            Self::Uploading => "uploading",
            Self::PausedUp => "pausedUP",
            Self::QueuedUp => "queuedUP",
            Self::StalledUp => "stalledUP",
            Self::CheckingUp => "checkingUP",
            Self::ForcedUp => "forcedUP",
            Self::Allocating => "allocating",
            Self::Downloading => "downloading",
            Self::MetaDl => "metaDL",
            Self::PausedDl => "pausedDL",
            Self::QueuedDl => "queuedDL",
            Self::StalledDl => "stalledDL",
            Self::CheckingDl => "checkingDL",
            Self::ForcedDl => "forcedDL",
            Self::CheckingResumeData => "checkingResumeData",
            Self::Moving => "moving",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for TorrentState {
    type Err = ModelError;

    fn from_str(value: &str) -> ModelResult<Self> {
        let state = match value {
            "error" => Self::Errored,
            "missingFiles" => Self::MissingFiles,
            "uploading" => Self::Uploading,
            // qBittorrent 5 renamed paused to stopped.
            "pausedUP" | "stoppedUP" => Self::PausedUp,
            "queuedUP" => Self::QueuedUp,
            "stalledUP" => Self::StalledUp,
            "checkingUP" => Self::CheckingUp,
            "forcedUP" => Self::ForcedUp,
            "allocating" => Self::Allocating,
            "downloading" => Self::Downloading,
            "metaDL" => Self::MetaDl,
            "pausedDL" | "stoppedDL" => Self::PausedDl,
            "queuedDL" => Self::QueuedDl,
            "stalledDL" => Self::StalledDl,
            "checkingDL" => Self::CheckingDl,
            "forcedDL" | "forceDL" => Self::ForcedDl,
            "checkingResumeData" => Self::CheckingResumeData,
            "moving" => Self::Moving,
            "unknown" => Self::Unknown,
            other => {
                return Err(ModelError::UnknownState {
                    value: other.to_string(),
                });
            }
        };
        Ok(state)
    }
}

impl TryFrom<String> for TorrentState {
    type Error = ModelError;

    fn try_from(value: String) -> ModelResult<Self> {
        value.parse()
    }
}

impl Display for TorrentState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One immutable telemetry reading for a torrent.
///
/// Field names follow the qBittorrent `torrents/info` payload so snapshots can
/// be deserialised straight from the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentSnapshot {
    /// Stable identifier (info-hash) of the torrent.
    #[serde(rename = "hash")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Reported engine state.
    pub state: TorrentState,
    /// Completion ratio in the range 0.0–1.0.
    pub progress: f64,
    /// Admission timestamp in seconds since the epoch.
    #[serde(default)]
    pub added_on: i64,
    /// Payload size in bytes.
    #[serde(default)]
    pub total_size: u64,
    /// Bytes downloaded so far.
    #[serde(default)]
    pub downloaded: u64,
    /// Download throughput in bytes per second.
    #[serde(default)]
    pub dlspeed: u64,
    /// Upload throughput in bytes per second.
    #[serde(default)]
    pub upspeed: u64,
    /// Remaining seconds, or [`ETA_SENTINEL`] when unknown.
    #[serde(default = "default_eta")]
    pub eta: u64,
    /// Category name; empty when uncategorised.
    #[serde(default)]
    pub category: String,
    /// Connected seeds.
    #[serde(default)]
    pub num_seeds: u32,
    /// Connected leechers.
    #[serde(default)]
    pub num_leechs: u32,
}

const fn default_eta() -> u64 {
    ETA_SENTINEL
}

impl TorrentSnapshot {
    /// Minimal snapshot with zeroed counters and no ETA estimate.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: TorrentState) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state,
            progress: 0.0,
            added_on: 0,
            total_size: 0,
            downloaded: 0,
            dlspeed: 0,
            upspeed: 0,
            eta: ETA_SENTINEL,
            category: String::new(),
            num_seeds: 0,
            num_leechs: 0,
        }
    }

    /// Whether the telemetry source had an ETA estimate for this reading.
    #[must_use]
    pub const fn has_eta(&self) -> bool {
        self.eta != ETA_SENTINEL
    }
}

/// Category offered in the change-category menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Category name sent back to the control service.
    pub name: String,
}

impl Category {
    /// Construct a category from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
