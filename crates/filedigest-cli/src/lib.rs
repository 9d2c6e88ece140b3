//! filedigest-cli library
//!
//! This module exposes the CLI definition and command implementations so
//! they can be tested without spawning the binary.

pub mod cli;
#[doc(hidden)]
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands};
