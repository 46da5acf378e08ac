use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Errors caused by the caller's data rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InputParse(_) | Self::ConfigParse(_) | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
