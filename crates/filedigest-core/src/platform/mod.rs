//! Platform module: The primitives the hashing pipeline consumes
//!
//! The pipeline never touches the filesystem directly. It goes through a
//! [`FilePlatform`], which provides a stat primitive, a native digest
//! primitive, and a bulk read primitive. [`LocalPlatform`] implements them
//! over the local filesystem.

mod local;
mod types;

pub use local::LocalPlatform;
pub use types::{DigestAlgorithm, FilePlatform, FileStat, PlatformError, ReadEncoding};
