//! Closure-backed doer stub.

use crate::domain::ports::Doer;
use crate::utils::error::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

type DoFn = Box<dyn Fn(usize) -> Result<()> + Send + Sync>;

/// Doer stub counting its calls.
///
/// The closure receives the 1-based index of the current call, which makes
/// "fail on the k-th call" scenarios a one-liner. When a completion semaphore
/// is attached, every finished call releases one permit, whatever its
/// outcome. Await `acquire_many(n)` on that semaphore to learn that `n` calls
/// spawned elsewhere have completed.
pub struct StubDoer {
    calls: AtomicUsize,
    do_fn: DoFn,
    completion: Option<Arc<Semaphore>>,
}

impl StubDoer {
    pub fn new(do_fn: impl Fn(usize) -> Result<()> + Send + Sync + 'static) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            do_fn: Box::new(do_fn),
            completion: None,
        }
    }

    pub fn succeeding() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Succeeds on every call except the `call`-th one.
    pub fn failing_on(call: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |current| {
            if current == call {
                Err(Error::operation_failed(message.clone()))
            } else {
                Ok(())
            }
        })
    }

    pub fn with_completion(mut self, completion: Arc<Semaphore>) -> Self {
        self.completion = Some(completion);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Doer for StubDoer {
    async fn do_it(&self) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let result = (self.do_fn)(call);

        if let Some(completion) = &self.completion {
            completion.add_permits(1);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_doer_failing_on() {
        let doer = StubDoer::failing_on(2, "boom");

        assert!(doer.do_it().await.is_ok());
        assert_eq!(doer.do_it().await.unwrap_err().failure_message(), Some("boom"));
        assert!(doer.do_it().await.is_ok());
        assert_eq!(doer.calls(), 3);
    }

    #[tokio::test]
    async fn test_stub_doer_releases_completion_even_on_failure() {
        let completion = Arc::new(Semaphore::new(0));
        let doer = StubDoer::failing_on(1, "boom").with_completion(completion.clone());

        assert!(doer.do_it().await.is_err());
        assert!(doer.do_it().await.is_ok());

        assert_eq!(completion.available_permits(), 2);
    }
}
