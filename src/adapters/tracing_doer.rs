use crate::domain::ports::Doer;
use crate::utils::error::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Doer whose side effect is a log line.
///
/// It keeps track of finished calls so that a caller can wait for work
/// dispatched through `User::count_and_do_async`.
#[derive(Debug)]
pub struct TracingDoer {
    performed: AtomicUsize,
    fail_on_call: Option<usize>,
    finished: Semaphore,
}

impl TracingDoer {
    pub fn new() -> Self {
        Self {
            performed: AtomicUsize::new(0),
            fail_on_call: None,
            finished: Semaphore::new(0),
        }
    }

    /// The `call`-th invocation (1-based) fails.
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::new()
        }
    }

    pub fn performed(&self) -> usize {
        self.performed.load(Ordering::SeqCst)
    }

    /// Waits until `calls` more invocations have finished, successful or not.
    pub async fn wait_for(&self, calls: usize) -> Result<()> {
        let permits = u32::try_from(calls)
            .map_err(|_| Error::operation_failed(format!("cannot wait for {} calls", calls)))?;
        if permits == 0 {
            return Ok(());
        }

        let acquired = self
            .finished
            .acquire_many(permits)
            .await
            .map_err(|e| Error::operation_failed(e.to_string()))?;
        acquired.forget();
        Ok(())
    }
}

impl Default for TracingDoer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Doer for TracingDoer {
    async fn do_it(&self) -> Result<()> {
        let call = self.performed.fetch_add(1, Ordering::SeqCst) + 1;

        let result = if self.fail_on_call == Some(call) {
            tracing::warn!(call, "doer call failing as configured");
            Err(Error::operation_failed(format!("call {} failed", call)))
        } else {
            tracing::info!(call, "done");
            Ok(())
        };

        self.finished.add_permits(1);
        result
    }
}
