//! Prefilled Gmail compose URLs
//!
//! The tool never sends mail itself. It hands the user a compose URL with
//! the recipients, subject, and a body that carries the English content
//! followed by both translations.

use url::Url;

use super::{DraftTranslations, EmailDraft};
use crate::domain::{MailbookError, Result};

const GMAIL_COMPOSE_BASE: &str = "https://mail.google.com/mail/";

/// Build the compose URL for a validated draft
pub fn compose_url(draft: &EmailDraft, translations: &DraftTranslations) -> Result<String> {
    let mut url = Url::parse(GMAIL_COMPOSE_BASE)
        .map_err(|e| MailbookError::Other(format!("gmail base url: {e}")))?;

    let body = compose_body(draft, translations);
    url.query_pairs_mut()
        .append_pair("view", "cm")
        .append_pair("fs", "1")
        .append_pair("to", &draft.recipients().join(","))
        .append_pair("su", &draft.subject)
        .append_pair("body", &body);

    Ok(url.into())
}

fn compose_body(draft: &EmailDraft, translations: &DraftTranslations) -> String {
    format!(
        "{}\n\n--- Hindi Translation ---\n{}\n\n--- Marathi Translation ---\n{}",
        draft.content, translations.content_hindi, translations.content_marathi
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> EmailDraft {
        EmailDraft {
            from: "registrar@college.edu".to_string(),
            to: "dean@college.edu, hod@college.edu".to_string(),
            subject: "Exam schedule & fees".to_string(),
            content: "Please find the schedule attached.".to_string(),
            sent_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            attachment: None,
        }
    }

    fn translations() -> DraftTranslations {
        DraftTranslations {
            subject_hindi: "परीक्षा कार्यक्रम".to_string(),
            content_hindi: "कृपया संलग्न कार्यक्रम देखें।".to_string(),
            subject_marathi: "परीक्षा वेळापत्रक".to_string(),
            content_marathi: "कृपया संलग्न वेळापत्रक पहा.".to_string(),
        }
    }

    #[test]
    fn test_compose_url_prefills_all_fields() {
        let url = compose_url(&draft(), &translations()).unwrap();
        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.host_str(), Some("mail.google.com"));

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("view".to_string(), "cm".to_string())));
        assert!(pairs.contains(&("fs".to_string(), "1".to_string())));
        assert!(pairs.contains(&(
            "to".to_string(),
            "dean@college.edu,hod@college.edu".to_string()
        )));
        assert!(pairs.contains(&("su".to_string(), "Exam schedule & fees".to_string())));
    }

    #[test]
    fn test_body_carries_both_translations() {
        let url = compose_url(&draft(), &translations()).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let body = parsed
            .query_pairs()
            .find(|(k, _)| k == "body")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(body.starts_with("Please find the schedule attached."));
        assert!(body.contains("--- Hindi Translation ---"));
        assert!(body.contains("कृपया संलग्न कार्यक्रम देखें।"));
        assert!(body.contains("--- Marathi Translation ---"));
        assert!(body.contains("कृपया संलग्न वेळापत्रक पहा."));
    }

    #[test]
    fn test_special_characters_are_percent_encoded() {
        let url = compose_url(&draft(), &translations()).unwrap();
        // Raw '&' in the subject must not split the query
        assert!(!url.contains("schedule &"));
        assert!(url.contains("su="));
    }
}
