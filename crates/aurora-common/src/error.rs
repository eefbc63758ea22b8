use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuroraError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AuroraError {
    /// Shorthand used by argument checks throughout the workspace.
    pub fn invalid(msg: impl Into<String>) -> Self {
        AuroraError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AuroraError>;
