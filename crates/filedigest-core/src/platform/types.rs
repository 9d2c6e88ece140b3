//! Platform primitive types

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::reference::FileReference;

/// Errors reported by platform primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("Cannot resolve reference: {0}")]
    Unresolvable(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl PlatformError {
    /// Map an I/O error for a reference, keeping not-found distinct
    pub(crate) fn from_io(reference: &FileReference, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(reference.to_string())
        } else {
            Self::Io(format!("{reference}: {err}"))
        }
    }
}

/// Result of the platform stat primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub mime_type: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Digest algorithms a native primitive may be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256,
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

/// Encodings supported by the bulk read primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadEncoding {
    /// Standard-alphabet, padded base64
    Base64,
}

/// The platform primitives the hashing pipeline depends on
#[async_trait]
pub trait FilePlatform: Send + Sync {
    /// Stat a path-based reference
    ///
    /// # Errors
    /// Returns an error if the reference cannot be stat'ed.
    async fn stat(&self, reference: &FileReference) -> Result<FileStat, PlatformError>;

    /// Digest the referenced content without materializing it in the caller
    ///
    /// # Errors
    /// Returns an error if the primitive is unavailable or the read fails.
    async fn native_digest(
        &self,
        reference: &FileReference,
        algorithm: DigestAlgorithm,
    ) -> Result<String, PlatformError>;

    /// Read the whole referenced content as an encoded string
    ///
    /// # Errors
    /// Returns an error if the read or the encoding fails.
    async fn read_encoded(
        &self,
        reference: &FileReference,
        encoding: ReadEncoding,
    ) -> Result<String, PlatformError>;
}
