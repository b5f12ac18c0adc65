//! Hosted datastore and object storage adapter
//!
//! The records table and the PDF bucket live behind one REST backend; the
//! [`RecordStore`] trait is the only surface the core sees.

pub mod models;
pub mod rest;
pub mod traits;

pub use rest::RestStore;
pub use traits::RecordStore;

use crate::config::StoreConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create a record store from configuration
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>> {
    let store = RestStore::new(config)?;
    Ok(Arc::new(store))
}
