//! Platform construction from CLI flags

use std::path::PathBuf;

use anyhow::{bail, Result};
use filedigest_core::LocalPlatform;
use tracing::debug;

/// Parse an `AUTHORITY=DIR` content root flag
///
/// # Errors
/// Returns an error if either side of the `=` is missing.
pub fn parse_content_root(spec: &str) -> Result<(String, PathBuf)> {
    match spec.split_once('=') {
        Some((authority, dir)) if !authority.is_empty() && !dir.is_empty() => {
            Ok((authority.to_string(), PathBuf::from(dir)))
        }
        _ => bail!("Invalid content root '{}', expected AUTHORITY=DIR", spec),
    }
}

/// Build the local platform from the global flags
///
/// # Errors
/// Returns an error if a content root flag is malformed.
pub fn build_platform(content_roots: &[String], native_digest: bool) -> Result<LocalPlatform> {
    let mut platform = LocalPlatform::new().with_native_digest(native_digest);
    for spec in content_roots {
        let (authority, dir) = parse_content_root(spec)?;
        debug!(
            "Content root: content://{}/ -> {}",
            authority,
            dir.display()
        );
        platform = platform.with_content_root(authority, dir);
    }
    Ok(platform)
}
