//! Error types for archive conversion.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Broad category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The archive suffix is not one we know how to open
    UnsupportedFormat,
    /// Unreadable path, corrupt archive or failed extraction
    Io,
    /// A `.json` member that does not parse as JSON
    Decode,
}

/// Any error that aborts an archive conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("不支持的压缩文件格式")]
    UnsupportedFormat { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source:#}", archive.display())]
    Extract {
        archive: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Create an I/O error with the offending path as context.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            context: path.display().to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            ConvertError::Io { .. } | ConvertError::Extract { .. } => ErrorKind::Io,
            ConvertError::Decode { .. } => ErrorKind::Decode,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
