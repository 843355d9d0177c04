use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Unknown format: {0}")]
    InvalidFormat(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unsupported import type: {0}")]
    UnsupportedImport(String),

    #[error("Block {index} out of range (document has {len} blocks)")]
    BlockOutOfRange { index: usize, len: usize },
}

impl DocumentError {
    pub fn invalid_format(key: impl Into<String>) -> Self {
        Self::InvalidFormat(key.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::BlockOutOfRange { index, len }
    }
}
