//! Connection settings for the WebAPI client.

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Address of a qBittorrent instance on the local host.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how patiently the client talks to the WebAPI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the WebAPI; always ends with `/`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Settings for `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Settings for the local default instance.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`parse_url`].
    pub fn local() -> ClientResult<Self> {
        parse_url(DEFAULT_BASE_URL).map(Self::new)
    }
}

/// Validate a WebAPI base URL supplied by the operator.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] when the input does not parse or is not
/// an `http`/`https` URL.
pub fn parse_url(input: &str) -> ClientResult<Url> {
    let url = Url::parse(input.trim()).map_err(|source| ClientError::InvalidUrl {
        value: input.to_string(),
        reason: source.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl {
            value: input.to_string(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }
    Ok(url)
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
