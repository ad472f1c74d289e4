use std::path::PathBuf;
use thiserror::Error;

/// Rejections from an in-memory collection. None of them mutate it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("malformed id: {0}")]
    InvalidId(String),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("collection limit of {0} entries reached")]
    LimitReached(usize),
    #[error("not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Csv,
    InvalidId,
    DuplicateId,
    LimitReached,
    NotFound,
    MissingHomeDir,
    InvalidDataPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Csv(_) => StoreErrorKind::Csv,
            StoreError::Collection(CollectionError::InvalidId(_)) => StoreErrorKind::InvalidId,
            StoreError::Collection(CollectionError::DuplicateId(_)) => StoreErrorKind::DuplicateId,
            StoreError::Collection(CollectionError::LimitReached(_)) => {
                StoreErrorKind::LimitReached
            }
            StoreError::Collection(CollectionError::NotFound(_)) => StoreErrorKind::NotFound,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
        }
    }
}
