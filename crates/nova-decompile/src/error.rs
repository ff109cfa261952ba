pub type Result<T> = std::result::Result<T, CastError>;

/// Precondition violations in a tree handed to the cast pass.
///
/// These mean the upstream stages produced an inconsistent tree; the pass stops at the first one
/// instead of emitting a partially reconciled unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error(
        "call to {member} has {arguments} argument(s) but only {parameter_types} resolved parameter type(s)"
    )]
    MissingParameterTypes {
        member: String,
        arguments: usize,
        parameter_types: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message and drop the source snippet `Display` would include.
        ConfigError::Toml(err.message().to_string())
    }
}
