//! CLI commands

pub mod check;
pub mod collect;
pub mod hash;
pub mod platform;
