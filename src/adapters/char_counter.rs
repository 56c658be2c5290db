use crate::domain::ports::Counter;
use crate::utils::error::{Error, Result};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// Counts the characters (Unicode scalar values) of the input.
///
/// The last successful count is kept, so a caller that only sees the result
/// of `User::count_and_do_async` can still learn how many calls were spawned.
#[derive(Debug, Default)]
pub struct CharCounter {
    max_count: Option<usize>,
    last_count: Mutex<Option<usize>>,
}

impl CharCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs with more than `max_count` characters are rejected.
    pub fn with_max_count(max_count: usize) -> Self {
        Self {
            max_count: Some(max_count),
            ..Self::default()
        }
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Result of the most recent successful `count`, if any.
    pub fn last_count(&self) -> Option<usize> {
        *self.last_count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Counter for CharCounter {
    async fn count(&self, input: &str) -> Result<usize> {
        let count = input.chars().count();
        tracing::debug!(count, "counted input characters");

        match self.max_count {
            Some(max) if count > max => Err(Error::operation_failed(format!(
                "input has {} characters, limit is {}",
                count, max
            ))),
            _ => {
                *self.last_count.lock().unwrap_or_else(PoisonError::into_inner) = Some(count);
                Ok(count)
            }
        }
    }
}
