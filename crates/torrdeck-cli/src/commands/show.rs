//! Offline classification of a stored snapshot.

use std::fs;
use std::path::Path;

use anyhow::anyhow;
use torrdeck_core::{MutationCoordinator, TorrentView};
use torrdeck_model::TorrentSnapshot;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};
use crate::output::render_view;

pub(crate) fn handle_show(path: &Path, format: OutputFormat) -> CliResult<()> {
    let raw = fs::read_to_string(path).map_err(|err| {
        CliError::failure(anyhow!(
            "failed to read snapshot file '{}': {err}",
            path.display()
        ))
    })?;
    let view = load_view(&raw)?;
    println!("{}", render_view(&view, format)?);
    Ok(())
}

/// Decode a snapshot and derive its view with no actions pending.
pub(crate) fn load_view(raw: &str) -> CliResult<TorrentView> {
    let snapshot: TorrentSnapshot = serde_json::from_str(raw)
        .map_err(|err| CliError::validation(format!("invalid snapshot: {err}")))?;
    Ok(TorrentView::build(&snapshot, &MutationCoordinator::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use torrdeck_core::MainButton;

    const PAUSED: &str = r#"{
        "hash": "8c4adbf9ebe66f1d804fb6a4fb9b74966c3ab609",
        "name": "debian-12.iso",
        "state": "pausedDL",
        "progress": 0.4,
        "eta": 8640000,
        "category": "",
        "num_seeds": 6
    }"#;

    #[test]
    fn paused_snapshot_offers_resume() -> CliResult<()> {
        let view = load_view(PAUSED)?;
        assert_eq!(view.main_button, MainButton::Resume);
        assert_eq!(view.eta, "Paused");
        assert!(!view.stats_visible);
        Ok(())
    }

    #[test]
    fn unknown_state_is_a_validation_error() {
        let raw = PAUSED.replace("pausedDL", "warpingDL");
        let err = load_view(&raw).err();
        assert!(matches!(
            err,
            Some(CliError::Validation(message)) if message.contains("warpingDL")
        ));
    }

    #[test]
    fn reads_snapshot_from_disk() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(PAUSED.as_bytes())?;
        assert!(handle_show(file.path(), OutputFormat::Json).is_ok());
        Ok(())
    }

    #[test]
    fn missing_file_is_an_operational_failure() {
        let err = handle_show(Path::new("/nonexistent/snapshot.json"), OutputFormat::Table).err();
        assert_eq!(err.map(|err| err.exit_code()), Some(3));
    }
}
