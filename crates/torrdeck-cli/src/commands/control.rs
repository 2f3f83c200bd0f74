//! Pause, resume, remove, and category commands.

use std::sync::Arc;

use anyhow::anyhow;
use torrdeck_core::{ActionDispatcher, ControlRequest, MutationCoordinator, TaskOutcome};
use tracing::info;

use crate::client::{AppContext, CliError, CliResult, validate_hash};
use crate::output::render_outcome;

pub(crate) async fn handle_control(
    ctx: &AppContext,
    hash: &str,
    request: ControlRequest,
) -> CliResult<()> {
    let hash = validate_hash(hash)?;
    let operation = request.operation();

    let dispatcher = ActionDispatcher::new(Arc::clone(&ctx.service));
    let mut coordinator = MutationCoordinator::new();
    let resolution = dispatcher
        .dispatch(&mut coordinator, &hash, request)
        .resolve()
        .await;
    coordinator.resolve(resolution);

    match resolution.outcome {
        TaskOutcome::Succeeded => {
            info!(operation, torrent_id = %hash, "request accepted");
            println!("{}", render_outcome(operation, &hash, ctx.output)?);
            Ok(())
        }
        TaskOutcome::Failed => Err(CliError::failure(anyhow!(
            "{operation} request for {hash} failed"
        ))),
    }
}
