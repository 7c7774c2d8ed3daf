use thiserror::Error;

#[derive(Error, Debug)]
pub enum LapscoreError {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("data parse error: {0}")]
    DataParse(String),

    #[error("malformed price file {path}: {message}")]
    PriceParse { path: String, message: String },

    #[error("price fetch failed: {0}")]
    Fetch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LapscoreError {
    fn from(err: reqwest::Error) -> Self {
        LapscoreError::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LapscoreError>;
