//! Tests for the strategy state machine

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use super::{ScriptedPlatform, HELLO_WORLD_SHA256};
use crate::error::{HashError, HashErrorKind};
use crate::hashing::{select_and_compute, FileMetadata, HashMethod, StrategyState};
use crate::options::HashOptions;
use crate::reference::FileReference;

fn native_error() -> HashError {
    HashError::NativeHash {
        reference: "/tmp/a".to_string(),
        cause: "unsupported".to_string(),
    }
}

fn metadata_with_size(reference: &str, size: Option<u64>) -> FileMetadata {
    let mut metadata = FileMetadata::from_reference(&FileReference::new(reference));
    metadata.size = size;
    metadata
}

// ============================================================================
// Pure transitions
// ============================================================================

#[test]
fn test_after_native_success() {
    let reference = FileReference::new("/tmp/a");
    let state = StrategyState::after_native(&reference, Ok(HELLO_WORLD_SHA256.to_string()), None);
    assert_eq!(
        state,
        StrategyState::Success {
            hash: HELLO_WORLD_SHA256.to_string(),
            method: HashMethod::Native
        }
    );
    assert!(state.is_terminal());
}

#[test]
fn test_after_native_failure_with_size_tries_fallback() {
    let reference = FileReference::new("/tmp/a");
    let state = StrategyState::after_native(&reference, Err(native_error()), Some(11));
    assert_eq!(state, StrategyState::TryFallback { size: 11 });
    assert!(!state.is_terminal());
}

#[test]
fn test_after_native_failure_without_size_is_unusable() {
    let reference = FileReference::new("content://media/1");
    let state = StrategyState::after_native(&reference, Err(native_error()), None);
    assert_eq!(
        state,
        StrategyState::Failed(HashError::FallbackUnusable {
            reference: "content://media/1".to_string(),
            size: None,
        })
    );
}

#[test]
fn test_after_native_failure_with_zero_size_keeps_size() {
    let reference = FileReference::new("/tmp/empty");
    let state = StrategyState::after_native(&reference, Err(native_error()), Some(0));

    let StrategyState::Failed(err) = state else {
        panic!("expected failed state, got {state:?}");
    };
    assert_eq!(
        err,
        HashError::FallbackUnusable {
            reference: "/tmp/empty".to_string(),
            size: Some(0),
        }
    );
    assert!(!err.to_string().contains("unknown"));
}

#[test]
fn test_after_fallback_transitions() {
    let ok = StrategyState::after_fallback(Ok(HELLO_WORLD_SHA256.to_string()));
    assert_eq!(
        ok,
        StrategyState::Success {
            hash: HELLO_WORLD_SHA256.to_string(),
            method: HashMethod::StreamingFallback
        }
    );

    let failed = StrategyState::after_fallback(Err(native_error()));
    assert!(matches!(failed, StrategyState::Failed(_)));
}

#[test]
fn test_non_terminal_states() {
    assert!(!StrategyState::Start.is_terminal());
    assert!(!StrategyState::TryNative.is_terminal());
}

// ============================================================================
// select_and_compute
// ============================================================================

#[tokio::test]
async fn test_native_success_skips_fallback() {
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256);
    let metadata = metadata_with_size("/tmp/hello.txt", Some(11));

    let outcome = select_and_compute(&platform, &metadata, &HashOptions::default()).await;

    assert_eq!(
        outcome.result.unwrap(),
        (HELLO_WORLD_SHA256.to_string(), HashMethod::Native)
    );
    assert_eq!(outcome.attempted, Some(HashMethod::Native));
    assert_eq!(platform.native_calls(), 1);
    assert_eq!(platform.read_calls(), 0);
}

#[tokio::test]
async fn test_native_uppercase_output_is_normalized() {
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256)
        .with_native(&HELLO_WORLD_SHA256.to_uppercase());
    let metadata = metadata_with_size("/tmp/hello.txt", Some(11));

    let outcome = select_and_compute(&platform, &metadata, &HashOptions::default()).await;
    let (hash, method) = outcome.result.unwrap();

    assert_eq!(hash, HELLO_WORLD_SHA256);
    assert_eq!(method, HashMethod::Native);
}

#[tokio::test]
async fn test_malformed_native_output_falls_back() {
    let platform =
        ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256).with_native("not-a-hash");
    let metadata = metadata_with_size("/tmp/hello.txt", Some(11));

    let outcome = select_and_compute(&platform, &metadata, &HashOptions::default()).await;

    assert_eq!(
        outcome.result.unwrap(),
        (HELLO_WORLD_SHA256.to_string(), HashMethod::StreamingFallback)
    );
    assert_eq!(platform.read_calls(), 1);
}

#[tokio::test]
async fn test_native_failure_with_known_size_uses_fallback() {
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256).without_native();
    let metadata = metadata_with_size("/tmp/hello.txt", Some(11));

    let outcome = select_and_compute(&platform, &metadata, &HashOptions::default()).await;

    assert_eq!(
        outcome.result.unwrap(),
        (HELLO_WORLD_SHA256.to_string(), HashMethod::StreamingFallback)
    );
    assert_eq!(outcome.attempted, Some(HashMethod::StreamingFallback));
}

#[tokio::test]
async fn test_native_failure_with_unknown_size_never_reads() {
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256).without_native();
    let metadata = metadata_with_size("content://media/external/5", None);

    let outcome = select_and_compute(&platform, &metadata, &HashOptions::default()).await;

    let err = outcome.result.unwrap_err();
    assert_eq!(err.kind(), HashErrorKind::FallbackUnusable);
    assert_eq!(outcome.attempted, Some(HashMethod::Native));
    assert_eq!(platform.read_calls(), 0);
}

#[tokio::test]
async fn test_native_failure_with_zero_size_never_reads() {
    let platform = ScriptedPlatform::serving(b"", HELLO_WORLD_SHA256).without_native();
    let metadata = metadata_with_size("/tmp/empty", Some(0));

    let outcome = select_and_compute(&platform, &metadata, &HashOptions::default()).await;

    let err = outcome.result.unwrap_err();
    assert_eq!(err.kind(), HashErrorKind::FallbackUnusable);
    assert!(err.to_string().contains("size 0"));
    assert_eq!(platform.read_calls(), 0);
}

#[tokio::test]
async fn test_prefer_native_false_still_tries_native() {
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256);
    let metadata = metadata_with_size("/tmp/hello.txt", Some(11));
    let options = HashOptions::default().with_prefer_native(false);

    let outcome = select_and_compute(&platform, &metadata, &options).await;

    assert_eq!(outcome.result.unwrap().1, HashMethod::Native);
    assert_eq!(platform.native_calls(), 1);
}

#[tokio::test]
async fn test_native_success_reports_completion_once() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let options = HashOptions::default().with_progress(move |p| sink.lock().unwrap().push(p));
    let platform = ScriptedPlatform::serving(b"hello world", HELLO_WORLD_SHA256);
    let metadata = metadata_with_size("/tmp/hello.txt", Some(11));

    let _ = select_and_compute(&platform, &metadata, &options).await;

    assert_eq!(*seen.lock().unwrap(), vec![100]);
}
