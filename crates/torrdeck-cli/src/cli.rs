//! Command-line parsing and dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use torrdeck_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use torrdeck_core::ControlRequest;
use torrdeck_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, command_span, init_logging};
use tracing::Instrument;
use url::Url;

use crate::client::{AppContext, CliResult, parse_url};
use crate::commands::control::handle_control;
use crate::commands::show::handle_show;

const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();
const BUILD_SHA: &str = match option_env!("TORRDECK_BUILD_SHA") {
    Some(sha) => sha,
    None => "dev",
};

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    execute(Cli::parse()).await
}

pub(crate) async fn execute(cli: Cli) -> i32 {
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        build_sha: BUILD_SHA,
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let span = command_span(command_label(&cli.command));
    match dispatch(cli).instrument(span).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let Cli {
        api_url,
        timeout,
        output,
        command,
        ..
    } = cli;

    let (hash, request) = match command {
        Command::Show(args) => return handle_show(&args.file, output),
        Command::Pause(args) => (args.hash, ControlRequest::Pause),
        Command::Resume(args) => (args.hash, ControlRequest::Resume),
        Command::Remove(args) => (
            args.hash,
            ControlRequest::Remove {
                delete_files: args.delete_files,
            },
        ),
        Command::SetCategory(args) => (args.hash, ControlRequest::SetCategory { name: args.name }),
    };

    let ctx = AppContext::connect(api_url, timeout, output)?;
    handle_control(&ctx, &hash, request).await
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Show(_) => "show",
        Command::Pause(_) => "pause",
        Command::Resume(_) => "resume",
        Command::Remove(_) => "remove",
        Command::SetCategory(_) => "set-category",
    }
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input
        .parse()
        .map_err(|err: torrdeck_telemetry::TelemetryError| err.to_string())
}

#[derive(Parser)]
#[command(
    name = "torrdeck",
    version,
    about = "Inspect and control torrents on a qBittorrent instance"
)]
pub(crate) struct Cli {
    #[arg(
        long = "url",
        global = true,
        env = "TORRDECK_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_BASE_URL
    )]
    api_url: Url,
    #[arg(
        long,
        global = true,
        env = "TORRDECK_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..),
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Per-request timeout in seconds"
    )]
    timeout: u64,
    #[arg(
        long,
        global = true,
        env = "TORRDECK_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: String,
    #[arg(
        long,
        global = true,
        env = "TORRDECK_LOG_FORMAT",
        value_parser = parse_log_format,
        help = "Log output format (json or pretty); inferred from the build when unset"
    )]
    log_format: Option<LogFormat>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a snapshot stored as JSON and print the derived card.
    Show(ShowArgs),
    /// Pause a torrent.
    Pause(HashArgs),
    /// Resume a paused torrent.
    Resume(HashArgs),
    /// Remove a torrent.
    Remove(RemoveArgs),
    /// Move a torrent into a category.
    SetCategory(SetCategoryArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Path to a single `torrents/info` entry.
    file: PathBuf,
}

#[derive(Args)]
struct HashArgs {
    /// Torrent info-hash.
    hash: String,
}

#[derive(Args)]
struct RemoveArgs {
    /// Torrent info-hash.
    hash: String,
    /// Also delete downloaded payload files.
    #[arg(long)]
    delete_files: bool,
}

#[derive(Args)]
struct SetCategoryArgs {
    /// Torrent info-hash.
    hash: String,
    /// Category name; pass an empty string to clear it.
    name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "8c4adbf9ebe66f1d804fb6a4fb9b74966c3ab609";

    #[test]
    fn defaults_point_at_local_instance() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["torrdeck", "pause", HASH])?;
        assert_eq!(cli.api_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(command_label(&cli.command), "pause");
        Ok(())
    }

    #[test]
    fn remove_and_category_arguments_parse() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["torrdeck", "remove", HASH, "--delete-files"])?;
        assert!(matches!(
            cli.command,
            Command::Remove(RemoveArgs {
                delete_files: true,
                ..
            })
        ));

        let cli = Cli::try_parse_from([
            "torrdeck",
            "--output",
            "json",
            "set-category",
            HASH,
            "linux",
        ])?;
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Command::SetCategory(SetCategoryArgs { ref name, .. }) if name == "linux"
        ));
        Ok(())
    }

    #[test]
    fn invalid_flags_are_rejected() {
        for args in [
            ["torrdeck", "--url", "ftp://nas", "pause", HASH],
            ["torrdeck", "--timeout", "0", "pause", HASH],
            ["torrdeck", "--log-format", "xml", "pause", HASH],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn log_format_flag_parses() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["torrdeck", "--log-format", "json", "resume", HASH])?;
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_hash_exits_with_validation_code() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["torrdeck", "pause", "not-a-hash"])?;
        assert_eq!(execute(cli).await, 2);
        Ok(())
    }
}
