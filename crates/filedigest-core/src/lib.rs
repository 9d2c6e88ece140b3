//! filedigest-core: Validated SHA-256 digests for file references
//!
//! Computes content digests for files named by path references or by opaque
//! content references that cannot be stat'ed. A platform's native digest
//! primitive is tried first; when it fails and the file size is known, the
//! content is read as base64, decoded, and hashed in process instead.
//!
//! # Entry points
//!
//! - [`compute_hash`] - one file, never fails, returns a [`HashResult`]
//! - [`get_hash_or_fail`] - one file, returns the hash or the error
//! - [`compute_batch`] - many files, sequential, fault-isolated

pub mod error;
pub mod hashing;
pub mod options;
pub mod platform;
pub mod reference;
pub mod validate;

// Re-export commonly used types
pub use error::{FallbackStage, HashError, HashErrorKind};
pub use hashing::{
    compute_batch, compute_hash, get_hash_or_fail, BatchSummary, FileMetadata, HashMethod,
    HashResult,
};
pub use options::{HashOptions, ProgressCallback, DEFAULT_CHUNK_SIZE};
pub use platform::{FilePlatform, LocalPlatform, PlatformError};
pub use reference::{FileReference, ReferenceKind};
pub use validate::{is_valid_hash, EMPTY_SHA256};
