//! Human-friendly formatting for snapshot fields.

use chrono::{DateTime, Utc};
use torrdeck_model::TorrentSnapshot;

use super::is_complete;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;
const TIB: u64 = 1024 * GIB;

/// Placeholder for values the snapshot does not carry.
const EMPTY_LABEL: &str = "–";

/// Byte count with binary units and one decimal.
#[must_use]
pub fn format_bytes(value: u64) -> String {
    let (unit, suffix) = match value {
        v if v >= TIB => (TIB, "TiB"),
        v if v >= GIB => (GIB, "GiB"),
        v if v >= MIB => (MIB, "MiB"),
        v if v >= KIB => (KIB, "KiB"),
        _ => return format!("{value} B"),
    };
    let whole = value / unit;
    let tenths = (value % unit) * 10 / unit;
    format!("{whole}.{tenths} {suffix}")
}

/// Throughput with binary units, e.g. `1.5 MiB/s`.
#[must_use]
pub fn format_rate(bytes_per_sec: u64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// Zero-padded `HH:MM:SS`; hours keep counting past a day.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Whole-percent completion, e.g. `40%`.
#[must_use]
pub fn progress_label(snapshot: &TorrentSnapshot) -> String {
    format!("{:.0}%", snapshot.progress.clamp(0.0, 1.0) * 100.0)
}

/// Calendar date the torrent was added, in UTC.
#[must_use]
pub fn added_label(snapshot: &TorrentSnapshot) -> String {
    DateTime::<Utc>::from_timestamp(snapshot.added_on, 0)
        .map_or_else(
            || EMPTY_LABEL.to_string(),
            |at| at.format("%Y-%m-%d").to_string(),
        )
}

/// Category name, or an en dash when uncategorised.
#[must_use]
pub fn category_label(snapshot: &TorrentSnapshot) -> String {
    if snapshot.category.is_empty() {
        EMPTY_LABEL.to_string()
    } else {
        snapshot.category.clone()
    }
}

/// Downloaded byte count, hidden once the payload is complete.
#[must_use]
pub fn downloaded_label(snapshot: &TorrentSnapshot) -> Option<String> {
    (!is_complete(snapshot)).then(|| format_bytes(snapshot.downloaded))
}
