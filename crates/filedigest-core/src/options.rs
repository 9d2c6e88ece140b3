//! Per-call hashing configuration

use std::fmt;
use std::sync::Arc;

/// Default read granularity for the streaming fallback (1 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Callback invoked with a completion percentage in `0..=100`
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Options for a single hash computation or a batch
///
/// A fresh value is built per call site; nothing here is shared global state.
#[derive(Clone)]
pub struct HashOptions {
    /// Surface human-readable stage narration at `info` level
    pub emit_logs: bool,
    /// Advisory only: the native primitive is always attempted first
    pub prefer_native: bool,
    /// Slice size used when feeding decoded bytes to the hasher
    pub chunk_size_bytes: usize,
    /// Invoked at coarse milestones
    pub on_progress: Option<ProgressCallback>,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            emit_logs: true,
            prefer_native: true,
            chunk_size_bytes: DEFAULT_CHUNK_SIZE,
            on_progress: None,
        }
    }
}

impl fmt::Debug for HashOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashOptions")
            .field("emit_logs", &self.emit_logs)
            .field("prefer_native", &self.prefer_native)
            .field("chunk_size_bytes", &self.chunk_size_bytes)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl HashOptions {
    /// Create options with the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable stage narration
    #[must_use]
    pub fn with_logs(mut self, emit_logs: bool) -> Self {
        self.emit_logs = emit_logs;
        self
    }

    /// Set the advisory native preference
    #[must_use]
    pub fn with_prefer_native(mut self, prefer_native: bool) -> Self {
        self.prefer_native = prefer_native;
        self
    }

    /// Set the fallback chunk size; zero falls back to [`DEFAULT_CHUNK_SIZE`]
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size_bytes: usize) -> Self {
        self.chunk_size_bytes = if chunk_size_bytes == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size_bytes
        };
        self
    }

    /// Register a progress callback
    #[must_use]
    pub fn with_progress(mut self, callback: impl Fn(u8) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Report a progress percentage to the callback, if any
    pub fn report_progress(&self, percent: u8) {
        if let Some(callback) = &self.on_progress {
            callback(percent.min(100));
        }
    }
}
