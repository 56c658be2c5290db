//! Closure-backed counter stub.

use crate::domain::ports::Counter;
use crate::utils::error::{Error, Result};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

type CountFn = Box<dyn Fn(&str) -> Result<usize> + Send + Sync>;

/// Counter stub returning whatever its closure returns.
///
/// Every input it receives is recorded, in call order.
///
/// ```
/// use counter_doer::testing::StubCounter;
/// use counter_doer::Counter;
///
/// # tokio_test_block_on(async {
/// let counter = StubCounter::returning(3);
/// assert_eq!(counter.count("foo").await.unwrap(), 3);
/// assert_eq!(counter.inputs(), vec!["foo".to_string()]);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
pub struct StubCounter {
    count_fn: CountFn,
    inputs: Mutex<Vec<String>>,
}

impl StubCounter {
    pub fn new(count_fn: impl Fn(&str) -> Result<usize> + Send + Sync + 'static) -> Self {
        Self {
            count_fn: Box::new(count_fn),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Always succeeds with `value`.
    pub fn returning(value: usize) -> Self {
        Self::new(move |_| Ok(value))
    }

    /// Always fails with an `OperationFailed` carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |_| Err(Error::operation_failed(message.clone())))
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn calls(&self) -> usize {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Counter for StubCounter {
    async fn count(&self, input: &str) -> Result<usize> {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(input.to_string());
        (self.count_fn)(input)
    }
}
