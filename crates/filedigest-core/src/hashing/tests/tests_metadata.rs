//! Tests for metadata resolution

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};

use super::{ScriptedPlatform, HELLO_WORLD_SHA256};
use crate::error::HashErrorKind;
use crate::hashing::{resolve_metadata, FileMetadata};
use crate::platform::{FileStat, PlatformError};
use crate::reference::{FileReference, DEFAULT_MIME_TYPE};

#[tokio::test]
async fn test_path_reference_is_stated() {
    let modified = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256).with_stat(Ok(
        FileStat {
            size: 11,
            mime_type: None,
            last_modified: Some(modified),
        },
    ));
    let reference = FileReference::new("/sdcard/Download/notes.txt");

    let metadata = resolve_metadata(&platform, &reference).await.unwrap();

    assert_eq!(platform.stat_calls(), 1);
    assert_eq!(metadata.name, "notes.txt");
    assert_eq!(metadata.size, Some(11));
    assert_eq!(metadata.mime_type.as_deref(), Some("text/plain"));
    assert_eq!(metadata.last_modified, Some(modified));
}

#[tokio::test]
async fn test_platform_mime_wins_over_extension() {
    let platform = ScriptedPlatform::serving(b"x", HELLO_WORLD_SHA256).with_stat(Ok(FileStat {
        size: 1,
        mime_type: Some("application/x-custom".to_string()),
        last_modified: None,
    }));
    let reference = FileReference::new("/tmp/file.txt");

    let metadata = resolve_metadata(&platform, &reference).await.unwrap();
    assert_eq!(metadata.mime_type.as_deref(), Some("application/x-custom"));
}

#[tokio::test]
async fn test_opaque_reference_skips_stat() {
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256);
    let reference = FileReference::new("content://media/external/images/42.png");

    let metadata = resolve_metadata(&platform, &reference).await.unwrap();

    assert_eq!(platform.stat_calls(), 0);
    assert_eq!(metadata.name, "42.png");
    assert_eq!(metadata.size, None);
    assert_eq!(metadata.mime_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_stat_failure_is_metadata_error() {
    let platform = ScriptedPlatform::serving(b"", HELLO_WORLD_SHA256)
        .with_stat(Err(PlatformError::NotFound("/missing.bin".to_string())));
    let reference = FileReference::new("/missing.bin");

    let err = resolve_metadata(&platform, &reference).await.unwrap_err();

    assert_eq!(err.kind(), HashErrorKind::Metadata);
    let msg = err.to_string();
    assert!(msg.contains("/missing.bin"));
    assert!(msg.contains("not found"));
}

#[test]
fn test_from_reference_unknown_extension() {
    let metadata = FileMetadata::from_reference(&FileReference::new("content://media/7"));
    assert_eq!(metadata.name, "7");
    assert_eq!(metadata.mime_type.as_deref(), Some(DEFAULT_MIME_TYPE));
    assert!(metadata.size.is_none());
}
