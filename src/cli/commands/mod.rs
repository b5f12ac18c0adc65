//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod compose;
pub mod download;
pub mod export;
pub mod init;
pub mod list;
pub mod validate;
