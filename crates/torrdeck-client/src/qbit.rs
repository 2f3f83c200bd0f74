//! Form-encoded control calls against `/api/v2/torrents`.
//!
//! # Design
//! - One POST per control call; the response body is ignored.
//! - Authentication is left to the server (host whitelisting); no cookie jar is kept.

use async_trait::async_trait;
use reqwest::Client;
use torrdeck_model::ControlService;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const PAUSE_PATH: &str = "api/v2/torrents/pause";
const RESUME_PATH: &str = "api/v2/torrents/resume";
const DELETE_PATH: &str = "api/v2/torrents/delete";
const SET_CATEGORY_PATH: &str = "api/v2/torrents/setCategory";

/// HTTP client for a qBittorrent instance.
#[derive(Clone, Debug)]
pub struct QbitClient {
    http: Client,
    base_url: Url,
}

impl QbitClient {
    /// Build a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| ClientError::Build { source })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Root URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post_form(
        &self,
        operation: &'static str,
        path: &str,
        form: &[(&str, &str)],
    ) -> ClientResult<()> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| ClientError::InvalidUrl {
                value: format!("{}{path}", self.base_url),
                reason: source.to_string(),
            })?;
        debug!(operation, %url, "sending control request");

        let response = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status { operation, status })
        }
    }
}

#[async_trait]
impl ControlService for QbitClient {
    async fn pause(&self, id: &str) -> anyhow::Result<()> {
        self.post_form("pause", PAUSE_PATH, &[("hashes", id)])
            .await?;
        Ok(())
    }

    async fn resume(&self, id: &str) -> anyhow::Result<()> {
        self.post_form("resume", RESUME_PATH, &[("hashes", id)])
            .await?;
        Ok(())
    }

    async fn remove(&self, id: &str, delete_files: bool) -> anyhow::Result<()> {
        let delete_files = if delete_files { "true" } else { "false" };
        self.post_form(
            "remove",
            DELETE_PATH,
            &[("hashes", id), ("deleteFiles", delete_files)],
        )
        .await?;
        Ok(())
    }

    async fn set_category(&self, id: &str, name: &str) -> anyhow::Result<()> {
        self.post_form(
            "set_category",
            SET_CATEGORY_PATH,
            &[("hashes", id), ("category", name)],
        )
        .await?;
        Ok(())
    }
}
