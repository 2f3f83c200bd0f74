#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! qBittorrent WebAPI implementation of the torrent control service.
//!
//! Layout: `config.rs` (base URL and timeout), `error.rs` (transport and status
//! failures), `qbit.rs` (the HTTP client).

pub mod config;
pub mod error;
pub mod qbit;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, parse_url};
pub use error::{ClientError, ClientResult};
pub use qbit::QbitClient;
