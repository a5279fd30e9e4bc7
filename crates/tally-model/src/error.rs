use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
