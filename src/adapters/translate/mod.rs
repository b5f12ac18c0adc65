//! Translation accessor
//!
//! The composer offers machine translation of the subject and body into
//! Hindi and Marathi. The hosted API is best-effort; when it fails, the
//! composer degrades to the static phrase-substitution [`fallback`].

pub mod fallback;
pub mod mymemory;

pub use mymemory::MyMemoryTranslator;

use crate::domain::Result;
use async_trait::async_trait;

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Hindi,
    Marathi,
}

impl Language {
    /// ISO 639-1 code used in the `langpair` API parameter
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Human-readable label used in body appendices and notifications
    pub fn label(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Machine translation capability
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate English text into the target language
    ///
    /// # Errors
    ///
    /// Fails with a `Translation` error when the service is unreachable or
    /// reports a non-success status. Callers are expected to degrade to the
    /// [`fallback`] table.
    async fn translate(&self, text: &str, target: Language) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Marathi.code(), "mr");
    }

    #[test]
    fn test_language_labels() {
        assert_eq!(Language::Hindi.to_string(), "Hindi");
        assert_eq!(Language::Marathi.to_string(), "Marathi");
    }
}
