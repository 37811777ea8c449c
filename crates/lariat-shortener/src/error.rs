use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("id generation failed: {0}")]
    IdGeneration(#[from] lariat_snowflake::Error),
    #[error("storage error: {0}")]
    Storage(String),
}
