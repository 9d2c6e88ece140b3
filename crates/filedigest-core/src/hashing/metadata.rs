//! Metadata resolution for file references

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::HashError;
use crate::platform::FilePlatform;
use crate::reference::{mime_from_extension, FileReference, ReferenceKind};

/// Metadata derived once per hash computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub reference: FileReference,
    pub name: String,
    /// Unknown for opaque references until the content is read
    pub size: Option<u64>,
    pub mime_type: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl FileMetadata {
    /// Metadata available without any platform call
    #[must_use]
    pub fn from_reference(reference: &FileReference) -> Self {
        let ext = reference.extension();
        Self {
            reference: reference.clone(),
            name: reference.display_name(),
            size: None,
            mime_type: Some(mime_from_extension(ext.as_deref()).to_string()),
            last_modified: None,
        }
    }
}

/// Resolve metadata for a reference
///
/// Path-based references are stat'ed; opaque references skip stat and keep
/// an unknown size.
///
/// # Errors
/// Returns `HashError::Metadata` if stat fails for a path-based reference.
pub async fn resolve_metadata<P>(
    platform: &P,
    reference: &FileReference,
) -> Result<FileMetadata, HashError>
where
    P: FilePlatform + ?Sized,
{
    let mut metadata = FileMetadata::from_reference(reference);

    match reference.kind() {
        ReferenceKind::OpaqueContent => {
            debug!("Opaque reference {}, size deferred to read", reference);
        }
        ReferenceKind::PathBased => {
            let stat = platform
                .stat(reference)
                .await
                .map_err(|e| HashError::Metadata {
                    reference: reference.to_string(),
                    cause: e.to_string(),
                })?;

            metadata.size = Some(stat.size);
            metadata.last_modified = stat.last_modified;
            if let Some(mime) = stat.mime_type {
                metadata.mime_type = Some(mime);
            }
        }
    }

    Ok(metadata)
}
