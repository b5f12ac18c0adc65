//! Result type alias for Mailbook
//!
//! This module provides a convenient Result type alias that uses
//! MailbookError as the error type.

use super::errors::MailbookError;

/// Result type alias for Mailbook operations
///
/// This is a convenience type alias that uses `MailbookError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use mailbook::domain::result::Result;
/// use mailbook::domain::errors::MailbookError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MailbookError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MailbookError>;
