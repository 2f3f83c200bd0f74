//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use serde::Serialize;
use torrdeck_core::{MainButton, TorrentView};

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

#[derive(Serialize)]
struct Outcome<'a> {
    operation: &'a str,
    torrent_id: &'a str,
    outcome: &'static str,
}

pub(crate) fn render_view(view: &TorrentView, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(view),
        OutputFormat::Table => Ok(view_table(view)),
    }
}

pub(crate) fn render_outcome(
    operation: &str,
    torrent_id: &str,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&Outcome {
            operation,
            torrent_id,
            outcome: "accepted",
        }),
        OutputFormat::Table => Ok(format!(
            "{operation} accepted for {torrent_id}; awaiting the next snapshot to confirm"
        )),
    }
}

fn to_json(value: &impl Serialize) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

fn view_table(view: &TorrentView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id: {}", view.id);
    let _ = writeln!(out, "name: {}", view.name);
    let _ = writeln!(out, "added: {}", view.added);
    let _ = writeln!(out, "size: {}", view.size);
    let _ = writeln!(out, "category: {}", view.category);
    let _ = writeln!(out, "progress: {}", view.progress);
    if let Some(downloaded) = &view.downloaded {
        let _ = writeln!(out, "downloaded: {downloaded}");
    }
    let _ = writeln!(out, "eta: {}", view.eta);
    if view.stats_visible {
        let _ = writeln!(out, "peers: {}", view.peers.count);
        let _ = writeln!(out, "speed: {}", view.speed_label);
    }
    let action = match view.main_button {
        MainButton::Pause => "pause",
        MainButton::Resume => "resume",
    };
    let _ = write!(out, "action: {action}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use torrdeck_core::MutationCoordinator;
    use torrdeck_model::{TorrentSnapshot, TorrentState};

    #[test]
    fn table_hides_stats_for_paused_torrents() {
        let mut snapshot = TorrentSnapshot::new("abc", "debian.iso", TorrentState::PausedDl);
        snapshot.progress = 0.4;
        let view = TorrentView::build(&snapshot, &MutationCoordinator::new());
        let table = view_table(&view);
        assert!(table.contains("eta: Paused"));
        assert!(table.contains("progress: 40%"));
        assert!(!table.contains("peers:"));
        assert!(table.ends_with("action: resume"));
    }

    #[test]
    fn table_shows_stats_while_running() {
        let mut snapshot = TorrentSnapshot::new("abc", "debian.iso", TorrentState::Downloading);
        snapshot.num_seeds = 3;
        snapshot.dlspeed = 2048;
        let view = TorrentView::build(&snapshot, &MutationCoordinator::new());
        let table = view_table(&view);
        assert!(table.contains("peers: 3"));
        assert!(table.contains("speed: 2.0 KiB/s"));
    }

    #[test]
    fn outcome_json_reports_acceptance_only() -> CliResult<()> {
        let json = render_outcome("pause", "abc", OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)
            .map_err(|err| CliError::failure(anyhow!(err)))?;
        assert_eq!(value["operation"], "pause");
        assert_eq!(value["torrent_id"], "abc");
        assert_eq!(value["outcome"], "accepted");
        assert!(value.get("pending").is_none());
        Ok(())
    }

    #[test]
    fn outcome_table_defers_to_next_snapshot() -> CliResult<()> {
        let text = render_outcome("resume", "abc", OutputFormat::Table)?;
        assert_eq!(
            text,
            "resume accepted for abc; awaiting the next snapshot to confirm"
        );
        Ok(())
    }
}
