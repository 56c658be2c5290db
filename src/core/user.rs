use crate::domain::ports::{Counter, Doer};
use crate::utils::error::Result;
use std::sync::Arc;

/// Aggregate composing a [`Counter`] and a [`Doer`].
///
/// Both collaborators are shared with the caller, which keeps its own handles
/// (typically to inspect a test double after the call). The aggregate holds
/// no state of its own and takes no locks.
pub struct User<C: Counter + ?Sized, D: Doer + ?Sized> {
    counter: Arc<C>,
    doer: Arc<D>,
}

impl<C: Counter + ?Sized, D: Doer + ?Sized> Clone for User<C, D> {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
            doer: Arc::clone(&self.doer),
        }
    }
}

impl<C: Counter + ?Sized, D: Doer + ?Sized> User<C, D> {
    pub fn new(counter: Arc<C>, doer: Arc<D>) -> Self {
        Self { counter, doer }
    }

    pub fn counter(&self) -> &Arc<C> {
        &self.counter
    }

    pub fn doer(&self) -> &Arc<D> {
        &self.doer
    }

    pub async fn count(&self, input: &str) -> Result<usize> {
        self.counter.count(input).await
    }

    /// Counts `input`, then runs the doer that many times, one after another.
    ///
    /// Stops at the first failing call and returns its error.
    pub async fn count_and_do(&self, input: &str) -> Result<()> {
        let count = self.counter.count(input).await?;
        tracing::debug!(count, "running doer sequentially");

        for _ in 0..count {
            self.doer.do_it().await?;
        }

        Ok(())
    }
}

impl<C: Counter + ?Sized, D: Doer + ?Sized + 'static> User<C, D> {
    /// Counts `input`, then spawns one Tokio task per doer call and returns
    /// without waiting for any of them.
    ///
    /// Only a counter failure is reported. Failures of the spawned calls are
    /// dropped, and nothing tells the caller when they have finished: any
    /// completion tracking has to be shared with the doer itself. There is no
    /// bound on the number of tasks spawned.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn count_and_do_async(&self, input: &str) -> Result<()> {
        let count = self.counter.count(input).await?;
        tracing::debug!(count, "dispatching doer tasks");

        for _ in 0..count {
            let doer = Arc::clone(&self.doer);
            tokio::spawn(async move {
                let _ = doer.do_it().await;
            });
        }

        Ok(())
    }
}
