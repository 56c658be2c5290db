use crate::utils::error::Result;
use async_trait::async_trait;

/// Maps an input string to a count.
#[cfg_attr(any(test, feature = "test_tools"), mockall::automock)]
#[async_trait]
pub trait Counter: Send + Sync {
    async fn count(&self, input: &str) -> Result<usize>;
}

/// Performs a side effect that may fail.
#[cfg_attr(any(test, feature = "test_tools"), mockall::automock)]
#[async_trait]
pub trait Doer: Send + Sync {
    async fn do_it(&self) -> Result<()>;
}
