//! Hash strategy selection: native first, streaming fallback second
//!
//! The decision points are expressed as an explicit state machine so each
//! transition can be tested without touching a platform:
//!
//! ```text
//! Start -> TryNative -> Success
//!                    -> TryFallback -> Success | Failed
//!                    -> Failed (size unknown or zero)
//! ```

use tracing::{debug, info, warn};

use super::fallback::compute_fallback_hash;
use super::metadata::FileMetadata;
use super::result::HashMethod;
use crate::error::HashError;
use crate::options::HashOptions;
use crate::platform::{DigestAlgorithm, FilePlatform};
use crate::reference::FileReference;
use crate::validate::validate_hash;

/// Result of one native digest attempt, already normalized and validated
pub type NativeOutcome = Result<String, HashError>;

/// States of the strategy selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyState {
    Start,
    TryNative,
    TryFallback { size: u64 },
    Success { hash: String, method: HashMethod },
    Failed(HashError),
}

impl StrategyState {
    /// Transition out of `TryNative`
    ///
    /// A native failure only leads to the fallback when `size` is known and
    /// non-zero.
    #[must_use]
    pub fn after_native(
        reference: &FileReference,
        outcome: NativeOutcome,
        size: Option<u64>,
    ) -> Self {
        match (outcome, size.filter(|&s| s > 0)) {
            (Ok(hash), _) => Self::Success {
                hash,
                method: HashMethod::Native,
            },
            (Err(err), Some(size)) => {
                debug!("Native digest failed ({}), falling back", err);
                Self::TryFallback { size }
            }
            (Err(err), None) => {
                debug!("Native digest failed ({}) with size {:?}", err, size);
                Self::Failed(HashError::FallbackUnusable {
                    reference: reference.to_string(),
                    size,
                })
            }
        }
    }

    /// Transition out of `TryFallback`
    #[must_use]
    pub fn after_fallback(outcome: Result<String, HashError>) -> Self {
        match outcome {
            Ok(hash) => Self::Success {
                hash,
                method: HashMethod::StreamingFallback,
            },
            Err(err) => Self::Failed(err),
        }
    }

    /// Whether no further transition is possible
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Failed(_))
    }
}

/// Final outcome of strategy selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub result: Result<(String, HashMethod), HashError>,
    /// Last strategy that ran
    pub attempted: Option<HashMethod>,
}

async fn try_native<P>(platform: &P, reference: &FileReference) -> NativeOutcome
where
    P: FilePlatform + ?Sized,
{
    let raw = platform
        .native_digest(reference, DigestAlgorithm::Sha256)
        .await
        .map_err(|e| HashError::NativeHash {
            reference: reference.to_string(),
            cause: e.to_string(),
        })?;

    validate_hash(&raw).map_err(|_| HashError::NativeHash {
        reference: reference.to_string(),
        cause: format!("malformed digest output {raw:?}"),
    })
}

/// Run the strategy state machine for one file
pub async fn select_and_compute<P>(
    platform: &P,
    metadata: &FileMetadata,
    options: &HashOptions,
) -> StrategyOutcome
where
    P: FilePlatform + ?Sized,
{
    let reference = &metadata.reference;
    let mut attempted = None;
    let mut state = StrategyState::Start;

    loop {
        state = match state {
            StrategyState::Start => {
                if !options.prefer_native {
                    debug!("prefer_native is advisory; native digest is still attempted first");
                }
                StrategyState::TryNative
            }
            StrategyState::TryNative => {
                attempted = Some(HashMethod::Native);
                if options.emit_logs {
                    info!("Computing native digest for {}", metadata.name);
                }
                let outcome = try_native(platform, reference).await;
                if outcome.is_ok() {
                    options.report_progress(100);
                } else if options.emit_logs {
                    warn!("Native digest unavailable for {}", metadata.name);
                }
                StrategyState::after_native(reference, outcome, metadata.size)
            }
            StrategyState::TryFallback { size } => {
                attempted = Some(HashMethod::StreamingFallback);
                let outcome = compute_fallback_hash(platform, reference, size, options).await;
                StrategyState::after_fallback(outcome)
            }
            StrategyState::Success { hash, method } => {
                return StrategyOutcome {
                    result: Ok((hash, method)),
                    attempted,
                };
            }
            StrategyState::Failed(err) => {
                return StrategyOutcome {
                    result: Err(err),
                    attempted,
                };
            }
        };
    }
}
