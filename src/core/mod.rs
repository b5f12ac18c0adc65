//! Business logic
//!
//! - [`browser`] - the record browser: in-memory record set, filtering,
//!   sorting, row expansion, attachment downloads, export orchestration
//! - [`export`] - spreadsheet building
//! - [`compose`] - draft validation, record creation, Gmail deep links
//! - [`notify`] - transient user-visible notifications

pub mod browser;
pub mod compose;
pub mod export;
pub mod notify;
