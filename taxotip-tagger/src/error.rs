use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Unterminated tag starting at byte {offset}")]
    MalformedMarkup { offset: usize },
}

pub type Result<T> = std::result::Result<T, TaggerError>;
