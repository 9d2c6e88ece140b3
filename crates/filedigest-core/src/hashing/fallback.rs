//! Streaming fallback: read, decode, and hash in process
//!
//! The read and decode primitives are monolithic, so progress is reported
//! at four fixed checkpoints rather than per byte.

use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::{FallbackStage, HashError};
use crate::options::HashOptions;
use crate::platform::{FilePlatform, ReadEncoding};
use crate::reference::FileReference;
use crate::validate::{normalize_hash, SHA256_HEX_LEN};

/// Progress reported at read start, decode start, hash start, and completion
pub const FALLBACK_CHECKPOINTS: [u8; 4] = [40, 60, 80, 100];

const READ_START: u8 = FALLBACK_CHECKPOINTS[0];
const DECODE_START: u8 = FALLBACK_CHECKPOINTS[1];
const HASH_START: u8 = FALLBACK_CHECKPOINTS[2];
const COMPLETE: u8 = FALLBACK_CHECKPOINTS[3];

/// Compute SHA-256 over the exact decoded content of a reference
///
/// `expected_size` is the size basis the caller resolved; a decoded length
/// that disagrees with it is logged but does not fail the computation.
///
/// # Errors
/// Returns `HashError::FallbackComputation` carrying the failing stage.
pub async fn compute_fallback_hash<P>(
    platform: &P,
    reference: &FileReference,
    expected_size: u64,
    options: &HashOptions,
) -> Result<String, HashError>
where
    P: FilePlatform + ?Sized,
{
    if options.emit_logs {
        info!(
            "Reading {} ({} bytes) for fallback hashing",
            reference, expected_size
        );
    }
    options.report_progress(READ_START);
    let encoded = platform
        .read_encoded(reference, ReadEncoding::Base64)
        .await
        .map_err(|e| HashError::fallback(reference.as_str(), FallbackStage::Read, e))?;

    options.report_progress(DECODE_START);
    let bytes = general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| HashError::fallback(reference.as_str(), FallbackStage::Decode, e))?;
    drop(encoded);

    if u64::try_from(bytes.len()).ok() != Some(expected_size) {
        warn!(
            "Decoded {} bytes for {}, expected {}",
            bytes.len(),
            reference,
            expected_size
        );
    }

    options.report_progress(HASH_START);
    let chunk_size = options.chunk_size_bytes.max(1);
    let mut hasher = Sha256::new();
    for chunk in bytes.chunks(chunk_size) {
        hasher.update(chunk);
    }
    debug!(
        "Hashed {} bytes in {} chunk(s) of up to {} bytes",
        bytes.len(),
        bytes.len().div_ceil(chunk_size),
        chunk_size
    );

    let hash = normalize_hash(&format!("{:x}", hasher.finalize()));
    if hash.len() != SHA256_HEX_LEN {
        return Err(HashError::fallback(
            reference.as_str(),
            FallbackStage::Hash,
            format!(
                "digest has {} characters, expected {SHA256_HEX_LEN}",
                hash.len()
            ),
        ));
    }

    options.report_progress(COMPLETE);
    if options.emit_logs {
        info!("Fallback hash complete for {}", reference);
    }
    Ok(hash)
}
