//! Shared control-service wiring and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use torrdeck_client::{ClientConfig, QbitClient};
use torrdeck_model::ControlService;
use url::Url;

use crate::cli::OutputFormat;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to control command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) service: Arc<dyn ControlService>,
    pub(crate) output: OutputFormat,
}

impl AppContext {
    /// Build a WebAPI-backed context from connection flags.
    pub(crate) fn connect(
        base_url: Url,
        timeout_secs: u64,
        output: OutputFormat,
    ) -> CliResult<Self> {
        let config = ClientConfig::new(base_url).with_timeout(Duration::from_secs(timeout_secs));
        let client = QbitClient::new(&config).map_err(CliError::failure)?;
        Ok(Self {
            service: Arc::new(client),
            output,
        })
    }
}

/// Parse the WebAPI URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    torrdeck_client::parse_url(input).map_err(|err| err.to_string())
}

/// Validate an info-hash argument: 40 (v1) or 64 (v2) hex digits.
pub(crate) fn validate_hash(input: &str) -> CliResult<String> {
    let hash = input.trim();
    let well_formed =
        matches!(hash.len(), 40 | 64) && hash.chars().all(|ch| ch.is_ascii_hexdigit());
    if well_formed {
        Ok(hash.to_ascii_lowercase())
    } else {
        Err(CliError::validation(format!(
            "'{input}' is not a torrent info-hash (expected 40 or 64 hex digits)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn exit_codes_split_validation_from_failure() {
        let validation = CliError::validation("bad input");
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.display_message(), "bad input");

        let failure = CliError::failure(anyhow!("server down"));
        assert_eq!(failure.exit_code(), 3);
        assert_eq!(failure.display_message(), "server down");
    }

    #[test]
    fn hashes_are_normalised_and_checked() -> CliResult<()> {
        let v1 = "8C4ADBF9EBE66F1D804FB6A4FB9B74966C3AB609";
        assert_eq!(validate_hash(v1)?, v1.to_ascii_lowercase());
        assert_eq!(validate_hash(&"a".repeat(64))?.len(), 64);

        let bad_inputs = [String::new(), "xyz".into(), "g".repeat(40), "a".repeat(41)];
        for bad in &bad_inputs {
            let err = validate_hash(bad).err();
            assert!(matches!(err, Some(CliError::Validation(_))), "{bad}");
        }
        Ok(())
    }

    #[test]
    fn parse_url_reports_reason() {
        assert!(parse_url("http://127.0.0.1:8080").is_ok());
        let err = parse_url("ftp://nas").err().unwrap_or_default();
        assert!(err.contains("unsupported scheme"));
    }
}
