//! Static phrase-substitution fallback
//!
//! When the translation API is unreachable, common institutional phrases are
//! substituted from a fixed table. Longer phrases are listed first so
//! "thank you" wins over "you". Text with no table hit is returned with a
//! language marker prefix instead of being silently passed through.

use super::Language;
use regex::RegexBuilder;

const HINDI_PHRASES: &[(&str, &str)] = &[
    ("good morning", "शुभ प्रभात"),
    ("good evening", "शुभ संध्या"),
    ("thank you", "धन्यवाद"),
    ("congratulations", "बधाई हो"),
    ("information", "जानकारी"),
    ("important", "महत्वपूर्ण"),
    ("document", "दस्तावेज़"),
    ("deadline", "अंतिम तिथि"),
    ("approval", "अनुमोदन"),
    ("meeting", "बैठक"),
    ("request", "अनुरोध"),
    ("urgent", "अत्यावश्यक"),
    ("project", "परियोजना"),
    ("report", "रिपोर्ट"),
    ("review", "समीक्षा"),
    ("update", "अद्यतन"),
    ("welcome", "स्वागत है"),
    ("regards", "शुभकामनाएं"),
    ("please", "कृपया"),
    ("message", "संदेश"),
    ("office", "कार्यालय"),
    ("email", "ईमेल"),
    ("hello", "नमस्ते"),
    ("dear", "प्रिय"),
    ("help", "मदद"),
];

const MARATHI_PHRASES: &[(&str, &str)] = &[
    ("good morning", "शुभ सकाळ"),
    ("thank you", "धन्यवाद"),
    ("important", "महत्त्वाचे"),
    ("document", "दस्तऐवज"),
    ("meeting", "बैठक"),
    ("request", "विनंती"),
    ("urgent", "तातडीचे"),
    ("report", "अहवाल"),
    ("welcome", "स्वागत आहे"),
    ("please", "कृपया"),
    ("message", "संदेश"),
    ("office", "कार्यालय"),
    ("email", "ईमेल"),
    ("hello", "नमस्कार"),
    ("dear", "प्रिय"),
];

fn phrase_table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Hindi => HINDI_PHRASES,
        Language::Marathi => MARATHI_PHRASES,
    }
}

fn marker(language: Language) -> &'static str {
    match language {
        Language::Hindi => "हिंदी अनुवाद:",
        Language::Marathi => "मराठी भाषांतर:",
    }
}

/// Substitute known phrases word-by-word, case-insensitively
///
/// Returns the substituted text, or the original prefixed with a language
/// marker when nothing in the table matched.
pub fn substitute(text: &str, language: Language) -> String {
    let mut translated = text.to_string();

    for (english, local) in phrase_table(language) {
        let pattern = format!(r"\b{}\b", regex::escape(english));
        // Table entries are fixed literals; the pattern always compiles
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("fixed phrase pattern");
        translated = re.replace_all(&translated, *local).into_owned();
    }

    if translated == text {
        format!("{} {}", marker(language), text)
    } else {
        translated
    }
}
