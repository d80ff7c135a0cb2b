use thiserror::Error;

/// ctas error types
#[derive(Error, Debug)]
pub enum CtasError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("{0} is not a valid stamp ID.")]
    InvalidStampId(String),

    #[error("{0} is not a valid stamp name.")]
    InvalidStampName(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// Result type for ctas operations
pub type Result<T> = std::result::Result<T, CtasError>;
