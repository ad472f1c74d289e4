use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown event category: {0}")]
    InvalidCategory(String),
    #[error("unknown repetition: {0}")]
    InvalidRepetition(String),
}
