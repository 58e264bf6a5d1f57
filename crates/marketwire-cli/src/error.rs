use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] marketwire_core::ValidationError),

    #[error(transparent)]
    OptionsTicker(#[from] marketwire_core::OptionsTickerError),

    #[error("invalid value for --{name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error(transparent)]
    Api(#[from] marketwire_core::ApiError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn invalid_argument(name: &'static str, reason: impl ToString) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.to_string(),
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::OptionsTicker(_) | Self::InvalidArgument { .. } => 2,
            Self::Api(_) => 3,
            Self::Serialization(_) | Self::Timestamp(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
