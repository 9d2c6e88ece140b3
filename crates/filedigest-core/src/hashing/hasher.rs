//! Single-file entry points

use std::time::Instant;

use tracing::{debug, info, warn};

use super::metadata::{resolve_metadata, FileMetadata};
use super::result::HashResult;
use super::strategy::select_and_compute;
use crate::error::HashError;
use crate::options::HashOptions;
use crate::platform::FilePlatform;
use crate::reference::FileReference;
use crate::validate::validate_hash;

/// Compute the SHA-256 of one referenced file
///
/// Never fails: every error ends up in [`HashResult::error`] with an empty
/// hash.
pub async fn compute_hash<P>(
    platform: &P,
    reference: &FileReference,
    options: &HashOptions,
) -> HashResult
where
    P: FilePlatform + ?Sized,
{
    let started = Instant::now();
    if options.emit_logs {
        info!(
            "Hashing {} ({})",
            reference.display_name(),
            reference.kind()
        );
    }

    let metadata = match resolve_metadata(platform, reference).await {
        Ok(metadata) => metadata,
        Err(err) => {
            if options.emit_logs {
                warn!("{}", err);
            }
            return HashResult::failure(
                err,
                FileMetadata::from_reference(reference),
                started.elapsed(),
                None,
            );
        }
    };
    debug!(
        "Resolved metadata for {}: size={:?}, mime={:?}",
        metadata.name, metadata.size, metadata.mime_type
    );

    let outcome = select_and_compute(platform, &metadata, options).await;
    let validated = outcome
        .result
        .and_then(|(hash, method)| validate_hash(&hash).map(|hash| (hash, method)));
    let result = match validated {
        Ok((hash, method)) => HashResult::success(hash, metadata, started.elapsed(), method),
        Err(err) => HashResult::failure(err, metadata, started.elapsed(), outcome.attempted),
    };

    if options.emit_logs {
        match &result.error {
            None => info!(
                "Hashed {} via {} in {:?}",
                result.metadata.name,
                result
                    .method
                    .map_or_else(|| "unknown".to_string(), |m| m.to_string()),
                result.duration
            ),
            Some(err) => warn!("{}", err),
        }
    }

    result
}

/// Compute a hash and return it, or the error the computation hit
///
/// # Errors
/// Returns the `HashError` stored on the result when hashing failed.
pub async fn get_hash_or_fail<P>(
    platform: &P,
    reference: &FileReference,
    log_enabled: bool,
) -> Result<String, HashError>
where
    P: FilePlatform + ?Sized,
{
    let options = HashOptions::default().with_logs(log_enabled);
    compute_hash(platform, reference, &options).await.into_hash()
}
