//! Domain models and types for Mailbook.
//!
//! This module contains the core domain models, types, and business rules for
//! Mailbook. The domain layer provides:
//!
//! - **Strongly-typed identifiers** ([`RecordId`])
//! - **Domain models** ([`EmailRecord`], [`NewEmailRecord`])
//! - **Error types** ([`MailbookError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Mailbook uses the newtype pattern for identifiers so record ids cannot be
//! confused with arbitrary strings:
//!
//! ```rust
//! use mailbook::domain::RecordId;
//!
//! # fn example() -> Result<(), String> {
//! let id = RecordId::new("rec-42")?;
//! assert_eq!(id.as_str(), "rec-42");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, MailbookError>`]:
//!
//! ```rust
//! use mailbook::domain::{MailbookError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(MailbookError::Validation("missing recipient".to_string()))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{MailbookError, StoreError};
pub use ids::RecordId;
pub use record::{EmailRecord, NewEmailRecord};
pub use result::Result;
