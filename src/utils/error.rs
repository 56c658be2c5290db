use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Operation failed: {message}")]
    OperationFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl Error {
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Error::OperationFailed {
            message: message.into(),
        }
    }

    /// Message carried by a collaborator failure, if this is one.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Error::OperationFailed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
