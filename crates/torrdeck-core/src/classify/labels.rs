//! Short and long labels for every torrent state.

use serde::Serialize;
use torrdeck_model::TorrentState;

/// Display labels attached to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StateLabel {
    /// Compact label shown in place of an ETA.
    pub short: &'static str,
    /// Sentence-length description for tooltips and detail panes.
    pub description: &'static str,
}

const fn label(short: &'static str, description: &'static str) -> StateLabel {
    StateLabel { short, description }
}

/// Label table lookup; the match is exhaustive so new states cannot go unlabelled.
#[must_use]
pub const fn state_label(state: TorrentState) -> StateLabel {
    match state {
        TorrentState::Errored => label("Error", "Some error occurred, applies to paused torrents"),
        TorrentState::MissingFiles => label("Missing", "Torrent data files are missing"),
        TorrentState::Uploading => label(
            "Seeding",
            "Torrent is being seeded and data is being transferred",
        ),
        TorrentState::PausedUp => label("Done", "Torrent is paused and has finished downloading"),
        TorrentState::QueuedUp => label(
            "Queued",
            "Queuing is enabled and torrent is queued for upload",
        ),
        TorrentState::StalledUp => label(
            "Seeding",
            "Torrent is being seeded, but no connections were made",
        ),
        TorrentState::CheckingUp => label(
            "Checking",
            "Torrent has finished downloading and is being checked",
        ),
        TorrentState::ForcedUp => label(
            "Forced",
            "Torrent is forced to upload, ignoring the queue limit",
        ),
        TorrentState::Allocating => label(
            "Allocating",
            "Torrent is allocating disk space for download",
        ),
        TorrentState::Downloading => label(
            "Downloading",
            "Torrent is being downloaded and data is being transferred",
        ),
        TorrentState::MetaDl => label(
            "Metadata",
            "Torrent has just started downloading and is fetching metadata",
        ),
        TorrentState::PausedDl => label(
            "Paused",
            "Torrent is paused and has not finished downloading",
        ),
        TorrentState::QueuedDl => label(
            "Queued",
            "Queuing is enabled and torrent is queued for download",
        ),
        TorrentState::StalledDl => label(
            "Stalled",
            "Torrent is being downloaded, but no connections were made",
        ),
        TorrentState::CheckingDl => label(
            "Checking",
            "Same as checking after completion, but torrent has not finished downloading",
        ),
        TorrentState::ForcedDl => label(
            "Forced",
            "Torrent is forced to download, ignoring the queue limit",
        ),
        TorrentState::CheckingResumeData => label("Resuming", "Checking resume data on startup"),
        TorrentState::Moving => label("Moving", "Torrent is moving to another location"),
        TorrentState::Unknown => label("Unknown", "Unknown status"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_both_labels() {
        for state in TorrentState::ALL {
            let label = state_label(state);
            assert!(!label.short.is_empty(), "{state}");
            assert!(!label.description.is_empty(), "{state}");
        }
    }

    #[test]
    fn paused_download_reads_paused() {
        assert_eq!(state_label(TorrentState::PausedDl).short, "Paused");
    }
}
