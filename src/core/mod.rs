pub mod runner;
pub mod user;

pub use crate::domain::ports::{Counter, Doer};
pub use crate::utils::error::Result;
