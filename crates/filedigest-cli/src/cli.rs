//! Command-line definition

use clap::{Parser, Subcommand};
use filedigest_core::DEFAULT_CHUNK_SIZE;

#[derive(Parser, Debug)]
#[command(name = "filedigest")]
#[command(author, version, long_about = None)]
#[command(about = "Validated SHA-256 digests for file references")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress per-stage narration
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Hash without the native digest primitive (always use the fallback)
    #[arg(long, global = true)]
    pub no_native: bool,

    /// Resolve content://AUTHORITY/... references under DIR (AUTHORITY=DIR)
    #[arg(long = "content-root", value_name = "AUTHORITY=DIR", global = true)]
    pub content_roots: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash one or more file references
    Hash {
        /// Paths, file:// URIs, or content:// references
        #[arg(required = true)]
        references: Vec<String>,

        /// Expand directories into the files they contain
        #[arg(short, long)]
        recursive: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Fallback chunk size in bytes
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Verify a reference against an expected SHA-256 digest
    Check {
        /// Path, file:// URI, or content:// reference
        reference: String,

        /// Expected digest (64 hex characters)
        expected: String,
    },
}
