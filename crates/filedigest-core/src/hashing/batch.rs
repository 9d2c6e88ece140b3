//! Sequential batch hashing with per-item fault isolation

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use super::hasher::compute_hash;
use super::result::{HashMethod, HashResult};
use crate::options::HashOptions;
use crate::platform::FilePlatform;
use crate::reference::FileReference;

/// Hash every reference in order, one at a time
///
/// Items are never processed concurrently, which keeps at most one file's
/// content in memory. A failed item yields a result with `error` set; the
/// batch itself cannot fail.
pub async fn compute_batch<P>(
    platform: &P,
    references: &[FileReference],
    options: &HashOptions,
) -> Vec<HashResult>
where
    P: FilePlatform + ?Sized,
{
    let mut results = Vec::with_capacity(references.len());

    for (index, reference) in references.iter().enumerate() {
        if options.emit_logs {
            info!("[{}/{}] {}", index + 1, references.len(), reference);
        }
        results.push(compute_hash(platform, reference, options).await);
    }

    if options.emit_logs {
        let summary = BatchSummary::from_results(&results);
        info!(
            "Batch complete: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        );
    }

    results
}

/// Aggregate counts over a batch's results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub native: usize,
    pub fallback: usize,
    #[serde(skip)]
    pub total_duration: Duration,
}

impl BatchSummary {
    /// Summarize a slice of results
    #[must_use]
    pub fn from_results(results: &[HashResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            summary.total_duration += result.duration;
            if !result.is_success() {
                summary.failed += 1;
                continue;
            }
            summary.succeeded += 1;
            match result.method {
                Some(HashMethod::Native) => summary.native += 1,
                Some(HashMethod::StreamingFallback) => summary.fallback += 1,
                None => {}
            }
        }

        summary
    }

    /// Whether every item produced a hash
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
