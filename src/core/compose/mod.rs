//! Email composition
//!
//! Validates a draft, translates its subject and content, stores the PDF
//! attachment, and persists the finished record. Sending itself happens in
//! the user's own mail client via a prefilled compose URL ([`gmail`]).

pub mod gmail;

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{info, warn};

use crate::adapters::store::RecordStore;
use crate::adapters::translate::{fallback, Language, Translator};
use crate::core::notify::{Notifier, Severity};
use crate::domain::{EmailRecord, MailbookError, NewEmailRecord, Result};

/// A record as entered by the user, before validation and translation
#[derive(Debug, Clone)]
pub struct EmailDraft {
    pub from: String,
    /// Comma-separated recipient addresses, as typed
    pub to: String,
    pub subject: String,
    pub content: String,
    pub sent_date: chrono::NaiveDate,
    /// Original filename and bytes of the PDF attachment, if any
    pub attachment: Option<(String, Vec<u8>)>,
}

/// Subject and content translations for both target languages
#[derive(Debug, Clone, Default)]
pub struct DraftTranslations {
    pub subject_hindi: String,
    pub content_hindi: String,
    pub subject_marathi: String,
    pub content_marathi: String,
}

impl EmailDraft {
    /// Recipient addresses split out of the comma-separated input
    pub fn recipients(&self) -> Vec<String> {
        self.to
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check the draft is complete and every address is well formed
    pub fn validate(&self) -> Result<()> {
        if self.from.trim().is_empty() {
            return Err(MailbookError::Validation(
                "sender address is required".to_string(),
            ));
        }
        if !is_valid_address(self.from.trim()) {
            return Err(MailbookError::Validation(format!(
                "invalid sender address: {}",
                self.from.trim()
            )));
        }
        let recipients = self.recipients();
        if recipients.is_empty() {
            return Err(MailbookError::Validation(
                "at least one recipient is required".to_string(),
            ));
        }
        for address in &recipients {
            if !is_valid_address(address) {
                return Err(MailbookError::Validation(format!(
                    "invalid recipient address: {address}"
                )));
            }
        }
        if self.subject.trim().is_empty() {
            return Err(MailbookError::Validation("subject is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(MailbookError::Validation("content is required".to_string()));
        }
        Ok(())
    }
}

fn is_valid_address(address: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Fixed literal, always compiles
    let re = RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("fixed address pattern")
    });
    re.is_match(address)
}

/// Drives a draft from user input to a persisted record
pub struct Composer {
    store: Arc<dyn RecordStore>,
    translator: Option<Arc<dyn Translator>>,
    notifier: Arc<dyn Notifier>,
}

impl Composer {
    pub fn new(
        store: Arc<dyn RecordStore>,
        translator: Option<Arc<dyn Translator>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            translator,
            notifier,
        }
    }

    /// Translate one field, falling back to phrase substitution when the
    /// translation service is disabled or unreachable.
    pub async fn translate_field(&self, text: &str, target: Language) -> String {
        if let Some(translator) = &self.translator {
            match translator.translate(text, target).await {
                Ok(translated) => return translated,
                Err(e) => {
                    warn!(language = %target, error = %e, "Translation service failed");
                    self.notifier.notify(
                        Severity::Info,
                        &format!("Used fallback translation for {}", target.label()),
                    );
                }
            }
        }
        fallback::substitute(text, target)
    }

    /// Translate the draft's subject and content into both languages
    pub async fn translate_draft(&self, draft: &EmailDraft) -> DraftTranslations {
        DraftTranslations {
            subject_hindi: self.translate_field(&draft.subject, Language::Hindi).await,
            content_hindi: self.translate_field(&draft.content, Language::Hindi).await,
            subject_marathi: self
                .translate_field(&draft.subject, Language::Marathi)
                .await,
            content_marathi: self
                .translate_field(&draft.content, Language::Marathi)
                .await,
        }
    }

    /// Validate, upload the attachment, and persist the translated record
    pub async fn save(
        &self,
        draft: &EmailDraft,
        translations: DraftTranslations,
    ) -> Result<EmailRecord> {
        draft.validate()?;

        let attachments = match &draft.attachment {
            Some((original_filename, bytes)) => {
                let key = self
                    .store
                    .upload_attachment(original_filename, bytes.clone())
                    .await?;
                info!(original = %original_filename, key, "Attachment uploaded");
                vec![key]
            }
            None => Vec::new(),
        };

        let new_record = NewEmailRecord {
            from: draft.from.trim().to_string(),
            recipients: draft.recipients(),
            subject: draft.subject.trim().to_string(),
            content: draft.content.trim().to_string(),
            subject_hindi: Some(translations.subject_hindi),
            content_hindi: Some(translations.content_hindi),
            subject_marathi: Some(translations.subject_marathi),
            content_marathi: Some(translations.content_marathi),
            attachments,
            sent_date: draft.sent_date,
        };

        let record = self.store.create_record(&new_record).await?;
        self.notifier
            .notify(Severity::Success, "Email record saved");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn draft() -> EmailDraft {
        EmailDraft {
            from: "registrar@college.edu".to_string(),
            to: "dean@college.edu, hod@college.edu".to_string(),
            subject: "Exam schedule".to_string(),
            content: "Please find the schedule attached.".to_string(),
            sent_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            attachment: None,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_recipients_split_and_trimmed() {
        let mut d = draft();
        d.to = " a@x.edu ,, b@y.edu ".to_string();
        assert_eq!(d.recipients(), vec!["a@x.edu", "b@y.edu"]);
    }

    #[test_case("", "dean@college.edu", "s", "c" ; "missing sender")]
    #[test_case("registrar@college.edu", "", "s", "c" ; "missing recipients")]
    #[test_case("registrar@college.edu", "not-an-address", "s", "c" ; "malformed recipient")]
    #[test_case("no-at-sign.edu", "dean@college.edu", "s", "c" ; "malformed sender")]
    #[test_case("registrar@college.edu", "dean@college.edu", "  ", "c" ; "blank subject")]
    #[test_case("registrar@college.edu", "dean@college.edu", "s", "" ; "blank content")]
    fn test_invalid_draft_rejected(from: &str, to: &str, subject: &str, content: &str) {
        let d = EmailDraft {
            from: from.to_string(),
            to: to.to_string(),
            subject: subject.to_string(),
            content: content.to_string(),
            sent_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            attachment: None,
        };
        assert!(matches!(
            d.validate(),
            Err(MailbookError::Validation(_))
        ));
    }

    #[test_case("a@b.c", true ; "minimal address")]
    #[test_case("first.last@sub.domain.edu", true ; "dotted address")]
    #[test_case("a@b", false ; "no dot in domain")]
    #[test_case("a b@c.d", false ; "space in local part")]
    fn test_address_shapes(address: &str, valid: bool) {
        assert_eq!(is_valid_address(address), valid);
    }
}
