use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoldpressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid keyword: keywords must not be empty")]
    EmptyKeyword,

    #[error("Invalid heading level: {0} (expected 0-9)")]
    InvalidHeadingLevel(u8),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Package error: {0}")]
    Zip(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl From<zip::result::ZipError> for BoldpressError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => BoldpressError::Io(io),
            other => BoldpressError::Zip(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoldpressError>;
