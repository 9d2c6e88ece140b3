//! Hash result types

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::metadata::FileMetadata;
use crate::error::HashError;

/// Strategy that produced (or last attempted) a hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashMethod {
    Native,
    StreamingFallback,
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::StreamingFallback => write!(f, "streaming-fallback"),
        }
    }
}

/// Outcome of a single-file computation
///
/// Either `hash` is a validated 64-char lowercase hex string and `error` is
/// `None`, or `hash` is empty and `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct HashResult {
    pub hash: String,
    pub metadata: FileMetadata,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    pub method: Option<HashMethod>,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<HashError>,
}

impl HashResult {
    pub(crate) fn success(
        hash: String,
        metadata: FileMetadata,
        duration: Duration,
        method: HashMethod,
    ) -> Self {
        Self {
            hash,
            metadata,
            duration,
            method: Some(method),
            error: None,
        }
    }

    pub(crate) fn failure(
        error: HashError,
        metadata: FileMetadata,
        duration: Duration,
        method: Option<HashMethod>,
    ) -> Self {
        Self {
            hash: String::new(),
            metadata,
            duration,
            method,
            error: Some(error),
        }
    }

    /// Whether a validated hash was produced
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The hash, if one was produced
    #[must_use]
    pub fn hash(&self) -> Option<&str> {
        if self.hash.is_empty() {
            None
        } else {
            Some(&self.hash)
        }
    }

    /// The error, if the computation failed
    #[must_use]
    pub fn error(&self) -> Option<&HashError> {
        self.error.as_ref()
    }

    /// Convert into the hash or the error
    ///
    /// # Errors
    /// Returns the stored error if the computation failed.
    pub fn into_hash(self) -> Result<String, HashError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.hash),
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

fn serialize_error<S: Serializer>(
    error: &Option<HashError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
