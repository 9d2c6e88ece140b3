//! Check command: compare a reference's digest with an expected value

use anyhow::{bail, Result};
use filedigest_core::validate::validate_hash;
use filedigest_core::{get_hash_or_fail, FilePlatform, FileReference};
use tracing::info;

/// Run the check command
///
/// # Errors
/// Returns an error if hashing fails or the digests differ.
pub async fn run<P>(reference: &str, expected: &str, platform: &P, log_enabled: bool) -> Result<()>
where
    P: FilePlatform + ?Sized,
{
    let actual = execute(reference, expected, platform, log_enabled).await?;
    println!("{actual}  {reference}: OK");
    Ok(())
}

/// Hash `reference` and return the digest if it matches `expected`
///
/// # Errors
/// Returns an error if `expected` is malformed, hashing fails, or the
/// digests differ.
pub async fn execute<P>(
    reference: &str,
    expected: &str,
    platform: &P,
    log_enabled: bool,
) -> Result<String>
where
    P: FilePlatform + ?Sized,
{
    let Ok(expected) = validate_hash(expected) else {
        bail!("Expected digest '{}' is not a SHA-256 hex string", expected);
    };

    let actual = get_hash_or_fail(platform, &FileReference::new(reference), log_enabled).await?;
    if actual != expected {
        bail!(
            "Digest mismatch for {}: expected {}, got {}",
            reference,
            expected,
            actual
        );
    }

    info!("✓ {} matches", reference);
    Ok(actual)
}
