#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Telemetry snapshot model and control-service contract for a single torrent.
//!
//! Layout: `model/` (snapshot, state set, categories), `service/` (the
//! asynchronous control surface), `error.rs` (contract violations).

pub mod error;
pub mod model;
pub mod service;

pub use error::{ModelError, ModelResult};
pub use model::{Category, ETA_SENTINEL, TorrentSnapshot, TorrentState};
pub use service::ControlService;
