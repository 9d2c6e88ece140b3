//! Error taxonomy for the hashing pipeline
//!
//! Every failure a single-file computation can hit is one of these variants.
//! `compute_hash` never returns them directly; they are stored on the
//! `HashResult` instead.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Stage of the streaming fallback that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStage {
    Read,
    Decode,
    Hash,
}

impl fmt::Display for FallbackStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Decode => write!(f, "decode"),
            Self::Hash => write!(f, "hash"),
        }
    }
}

/// Errors that can occur while computing a file hash
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("Failed to read metadata for {reference}: {cause}")]
    Metadata { reference: String, cause: String },

    #[error("Native digest failed for {reference}: {cause}")]
    NativeHash { reference: String, cause: String },

    #[error("Streaming fallback unusable for {reference}: {}", unusable_reason(.size))]
    FallbackUnusable {
        reference: String,
        size: Option<u64>,
    },

    #[error("Streaming fallback failed at {stage} stage for {reference}: {cause}")]
    FallbackComputation {
        reference: String,
        stage: FallbackStage,
        cause: String,
    },

    #[error("Invalid hash format: {value:?}")]
    Validation { value: String },
}

fn unusable_reason(size: &Option<u64>) -> &'static str {
    match size {
        None => "file size is unknown",
        Some(0) => "file is empty (size 0)",
        Some(_) => "no known non-zero size",
    }
}

/// Category of a [`HashError`], for callers that branch on the kind only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashErrorKind {
    Metadata,
    NativeHash,
    FallbackUnusable,
    FallbackComputation,
    Validation,
}

impl HashError {
    /// Get the category of this error
    #[must_use]
    pub const fn kind(&self) -> HashErrorKind {
        match self {
            Self::Metadata { .. } => HashErrorKind::Metadata,
            Self::NativeHash { .. } => HashErrorKind::NativeHash,
            Self::FallbackUnusable { .. } => HashErrorKind::FallbackUnusable,
            Self::FallbackComputation { .. } => HashErrorKind::FallbackComputation,
            Self::Validation { .. } => HashErrorKind::Validation,
        }
    }

    pub(crate) fn fallback(
        reference: impl Into<String>,
        stage: FallbackStage,
        cause: impl fmt::Display,
    ) -> Self {
        Self::FallbackComputation {
            reference: reference.into(),
            stage,
            cause: cause.to_string(),
        }
    }
}
