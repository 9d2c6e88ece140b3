//! Shared test doubles for the hashing pipeline

mod tests_metadata;
mod tests_strategy;

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};

use crate::platform::{DigestAlgorithm, FilePlatform, FileStat, PlatformError, ReadEncoding};
use crate::reference::FileReference;

/// Platform whose primitives return canned responses and count calls
pub(crate) struct ScriptedPlatform {
    pub stat: Result<FileStat, PlatformError>,
    pub native: Result<String, PlatformError>,
    pub read: Result<String, PlatformError>,
    pub stat_calls: AtomicUsize,
    pub native_calls: AtomicUsize,
    pub read_calls: AtomicUsize,
}

impl ScriptedPlatform {
    /// A platform serving `content` with a working native primitive
    pub fn serving(content: &[u8], native_hash: &str) -> Self {
        Self {
            stat: Ok(FileStat {
                size: content.len() as u64,
                mime_type: None,
                last_modified: None,
            }),
            native: Ok(native_hash.to_string()),
            read: Ok(general_purpose::STANDARD.encode(content)),
            stat_calls: AtomicUsize::new(0),
            native_calls: AtomicUsize::new(0),
            read_calls: AtomicUsize::new(0),
        }
    }

    pub fn without_native(mut self) -> Self {
        self.native = Err(PlatformError::Unsupported("native sha256 digest".to_string()));
        self
    }

    pub fn with_native(mut self, output: &str) -> Self {
        self.native = Ok(output.to_string());
        self
    }

    pub fn with_stat(mut self, stat: Result<FileStat, PlatformError>) -> Self {
        self.stat = stat;
        self
    }

    pub fn with_read(mut self, read: Result<String, PlatformError>) -> Self {
        self.read = read;
        self
    }

    pub fn native_calls(&self) -> usize {
        self.native_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn stat_calls(&self) -> usize {
        self.stat_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FilePlatform for ScriptedPlatform {
    async fn stat(&self, _reference: &FileReference) -> Result<FileStat, PlatformError> {
        self.stat_calls.fetch_add(1, Ordering::SeqCst);
        self.stat.clone()
    }

    async fn native_digest(
        &self,
        _reference: &FileReference,
        _algorithm: DigestAlgorithm,
    ) -> Result<String, PlatformError> {
        self.native_calls.fetch_add(1, Ordering::SeqCst);
        self.native.clone()
    }

    async fn read_encoded(
        &self,
        _reference: &FileReference,
        _encoding: ReadEncoding,
    ) -> Result<String, PlatformError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.read.clone()
    }
}

/// echo -n 'hello world' | sha256sum
pub(crate) const HELLO_WORLD_SHA256: &str =
    "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
