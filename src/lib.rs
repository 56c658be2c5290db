pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod testing;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "test_tools")]
pub use domain::ports::{MockCounter, MockDoer};

pub use adapters::{CharCounter, TracingDoer};
pub use config::{FileConfig, Mode, RunConfig};
pub use crate::core::user::User;
pub use domain::ports::{Counter, Doer};
pub use utils::error::{Error, Result};
