use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PatternError {
    pub fn unknown<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
