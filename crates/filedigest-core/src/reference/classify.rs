//! File reference type and scheme classification

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Schemes resolved through a content-resolution layer rather than a path
pub const OPAQUE_SCHEMES: &[&str] = &["content://"];

/// Display name used when nothing can be derived from the reference
pub const UNKNOWN_NAME: &str = "Unknown";

const FILE_SCHEME: &str = "file://";

/// How a reference is resolved by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// No reliable stat; must be read to learn its size
    OpaqueContent,
    /// Backed by a filesystem path; supports stat before read
    PathBased,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpaqueContent => write!(f, "opaque-content"),
            Self::PathBased => write!(f, "path-based"),
        }
    }
}

/// An opaque string identifying a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference(String);

impl FileReference {
    /// Create a reference from any string-like value
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the reference by its scheme prefix
    #[must_use]
    pub fn kind(&self) -> ReferenceKind {
        if OPAQUE_SCHEMES
            .iter()
            .any(|scheme| self.0.starts_with(scheme))
        {
            ReferenceKind::OpaqueContent
        } else {
            ReferenceKind::PathBased
        }
    }

    /// Whether this is an opaque content reference
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.kind() == ReferenceKind::OpaqueContent
    }

    /// Best-effort display name: last path segment of the decoded reference
    ///
    /// Never fails; yields [`UNKNOWN_NAME`] when no segment is left.
    #[must_use]
    pub fn display_name(&self) -> String {
        let decoded = percent_decode_str(&self.0).decode_utf8_lossy();
        let without_query = decoded
            .split_once('?')
            .map_or(decoded.as_ref(), |(head, _)| head);

        let name = without_query
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();

        if name.is_empty() || name.ends_with(':') {
            UNKNOWN_NAME.to_string()
        } else {
            name.to_string()
        }
    }

    /// Lowercased extension of the display name, if it has one
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = self.display_name();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                Some(ext.to_ascii_lowercase())
            }
            _ => None,
        }
    }

    /// Local filesystem path for a path-based reference
    ///
    /// Strips an optional `file://` prefix and percent-decodes the rest.
    /// Returns `None` for opaque references.
    #[must_use]
    pub fn to_local_path(&self) -> Option<PathBuf> {
        if self.is_opaque() {
            return None;
        }
        let raw = self.0.strip_prefix(FILE_SCHEME).unwrap_or(&self.0);
        let decoded: Cow<'_, str> = if self.0.starts_with(FILE_SCHEME) {
            percent_decode_str(raw).decode_utf8_lossy()
        } else {
            Cow::Borrowed(raw)
        };
        Some(PathBuf::from(decoded.as_ref()))
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FileReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&Path> for FileReference {
    fn from(value: &Path) -> Self {
        Self(value.display().to_string())
    }
}

impl From<PathBuf> for FileReference {
    fn from(value: PathBuf) -> Self {
        Self::from(value.as_path())
    }
}
