//! Hashing module: Metadata resolution, strategy selection, and batches
//!
//! A single computation runs reference classification, metadata resolution,
//! the native-first strategy with its streaming fallback, and final
//! validation, then folds everything into a [`HashResult`]. Batches run that
//! pipeline sequentially, one file at a time.

mod batch;
mod fallback;
mod hasher;
mod metadata;
mod result;
mod strategy;

pub use batch::{compute_batch, BatchSummary};
pub use fallback::{compute_fallback_hash, FALLBACK_CHECKPOINTS};
pub use hasher::{compute_hash, get_hash_or_fail};
pub use metadata::{resolve_metadata, FileMetadata};
pub use result::{HashMethod, HashResult};
pub use strategy::{select_and_compute, NativeOutcome, StrategyOutcome, StrategyState};

#[cfg(test)]
mod tests;
