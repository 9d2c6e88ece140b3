//! Local filesystem platform

use std::collections::HashMap;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;
use sha2::{Digest, Sha256};

use super::types::{DigestAlgorithm, FilePlatform, FileStat, PlatformError, ReadEncoding};
use crate::reference::{FileReference, OPAQUE_SCHEMES};

const NATIVE_BUFFER_SIZE: usize = 64 * 1024;

/// Platform backed by the local filesystem
///
/// Path references map straight to paths. Opaque `content://authority/...`
/// references are resolved against directories registered per authority,
/// and cannot be stat'ed.
#[derive(Debug, Clone)]
pub struct LocalPlatform {
    content_roots: HashMap<String, PathBuf>,
    native_digest: bool,
}

impl Default for LocalPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalPlatform {
    /// Create a platform with the native digest primitive available
    #[must_use]
    pub fn new() -> Self {
        Self {
            content_roots: HashMap::new(),
            native_digest: true,
        }
    }

    /// Resolve `content://<authority>/...` references under `root`
    #[must_use]
    pub fn with_content_root(
        mut self,
        authority: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        self.content_roots.insert(authority.into(), root.into());
        self
    }

    /// Enable or disable the native digest primitive
    #[must_use]
    pub fn with_native_digest(mut self, enabled: bool) -> Self {
        self.native_digest = enabled;
        self
    }

    /// Resolve a reference of either kind to a local path
    ///
    /// # Errors
    /// Returns `Unresolvable` for unknown authorities or escaping paths.
    pub fn resolve(&self, reference: &FileReference) -> Result<PathBuf, PlatformError> {
        if let Some(path) = reference.to_local_path() {
            return Ok(path);
        }

        let raw = reference.as_str();
        let rest = OPAQUE_SCHEMES
            .iter()
            .find_map(|scheme| raw.strip_prefix(scheme))
            .ok_or_else(|| PlatformError::Unresolvable(raw.to_string()))?;
        let rest = rest.split_once('?').map_or(rest, |(head, _)| head);
        let (authority, tail) = rest.split_once('/').unwrap_or((rest, ""));

        let root = self.content_roots.get(authority).ok_or_else(|| {
            PlatformError::Unresolvable(format!("unknown authority '{authority}'"))
        })?;

        let decoded = percent_decode_str(tail).decode_utf8_lossy();
        let relative = Path::new(decoded.as_ref());
        let escapes = relative.components().any(|c| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes || relative.as_os_str().is_empty() {
            return Err(PlatformError::Unresolvable(raw.to_string()));
        }

        Ok(root.join(relative))
    }
}

fn digest_file(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; NATIVE_BUFFER_SIZE];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[async_trait]
impl FilePlatform for LocalPlatform {
    async fn stat(&self, reference: &FileReference) -> Result<FileStat, PlatformError> {
        if reference.is_opaque() {
            return Err(PlatformError::Unsupported(format!(
                "stat on opaque reference {reference}"
            )));
        }

        let path = self.resolve(reference)?;
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| PlatformError::from_io(reference, &e))?;
        if !metadata.is_file() {
            return Err(PlatformError::Io(format!("{reference}: not a regular file")));
        }

        Ok(FileStat {
            size: metadata.len(),
            mime_type: None,
            last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        })
    }

    async fn native_digest(
        &self,
        reference: &FileReference,
        algorithm: DigestAlgorithm,
    ) -> Result<String, PlatformError> {
        if !self.native_digest {
            return Err(PlatformError::Unsupported(format!(
                "native {algorithm} digest"
            )));
        }

        let path = self.resolve(reference)?;
        let hash = tokio::task::spawn_blocking(move || digest_file(&path))
            .await
            .map_err(|e| PlatformError::Io(format!("digest task failed: {e}")))?
            .map_err(|e| PlatformError::from_io(reference, &e))?;

        Ok(hash)
    }

    async fn read_encoded(
        &self,
        reference: &FileReference,
        encoding: ReadEncoding,
    ) -> Result<String, PlatformError> {
        let path = self.resolve(reference)?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| PlatformError::from_io(reference, &e))?;

        match encoding {
            ReadEncoding::Base64 => Ok(general_purpose::STANDARD.encode(bytes)),
        }
    }
}
