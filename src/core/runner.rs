use crate::adapters::{CharCounter, TracingDoer};
use crate::config::{Mode, RunConfig};
use crate::core::user::User;
use crate::utils::error::Result;
use std::sync::Arc;

/// Wires the real adapters into a `User` and runs the configured mode.
///
/// Returns how many doer calls were performed.
pub async fn run(config: &RunConfig) -> Result<usize> {
    let counter = Arc::new(match config.max_count {
        Some(max) => CharCounter::with_max_count(max),
        None => CharCounter::new(),
    });
    let doer = Arc::new(match config.fail_on_call {
        Some(call) => TracingDoer::failing_on(call),
        None => TracingDoer::new(),
    });
    let user = User::new(Arc::clone(&counter), Arc::clone(&doer));

    match config.mode {
        Mode::Sync => user.count_and_do(&config.input).await?,
        Mode::Async => {
            user.count_and_do_async(&config.input).await?;
            // Spawned calls report nothing back; wait on the doer for as many
            // calls as the count that was just dispatched.
            let dispatched = counter.last_count().unwrap_or_default();
            doer.wait_for(dispatched).await?;
        }
    }

    let performed = doer.performed();
    tracing::info!(performed, "doer calls finished");
    Ok(performed)
}
