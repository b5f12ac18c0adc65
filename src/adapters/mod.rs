//! External integrations
//!
//! This module contains the adapters for external services:
//!
//! - [`store`] - Hosted datastore and object storage (records table + PDF bucket)
//! - [`translate`] - Machine translation with a static fallback
//!
//! Everything behind these adapters is an external collaborator; the core
//! only sees the traits and the domain error taxonomy.

pub mod store;
pub mod translate;
