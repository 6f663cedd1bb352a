use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevMatchError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("User profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {message}")]
    GitHub { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DevMatchError>;
