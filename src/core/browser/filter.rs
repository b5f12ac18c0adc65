//! Pure filtering and sorting of the loaded record set
//!
//! The visible view is always recomputed from `(records, query)`; there is no
//! hidden state. Search is a case-insensitive substring match over every text
//! field, the date filter is exact equality on the sent date, and the two
//! predicates intersect. Sorting is stable so equal keys keep their input
//! order regardless of direction.

use crate::domain::record::EmailRecord;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// Field the visible view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    SentDate,
    CreatedAt,
    From,
    Recipients,
    Subject,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sent-date" | "date" => Ok(SortKey::SentDate),
            "created-at" | "created" => Ok(SortKey::CreatedAt),
            "from" => Ok(SortKey::From),
            "to" | "recipients" => Ok(SortKey::Recipients),
            "subject" => Ok(SortKey::Subject),
            other => Err(format!(
                "Unknown sort key '{other}'. Use: date, created, from, to, subject"
            )),
        }
    }
}

/// Sort direction; repeated selection of the same key flips it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The browser's current search, filter, and sort settings
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    /// Case-insensitive substring; empty matches everything
    pub search_term: String,

    /// Exact-match filter on the sent date
    pub date_filter: Option<NaiveDate>,

    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            date_filter: None,
            sort_key: SortKey::SentDate,
            sort_direction: SortDirection::Descending,
        }
    }
}

impl RecordQuery {
    /// Select a sort key
    ///
    /// Selecting the current key flips the direction; selecting a new key
    /// resets the direction to descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Descending;
        }
    }
}

/// Whether a record matches the search term and date filter
pub fn matches(record: &EmailRecord, query: &RecordQuery) -> bool {
    if let Some(date) = query.date_filter {
        if record.sent_date != date {
            return false;
        }
    }

    if query.search_term.is_empty() {
        return true;
    }

    let term = query.search_term.to_lowercase();
    let haystacks = [
        record.from.as_str(),
        record.subject.as_str(),
        record.content.as_str(),
        record.subject_hindi.as_deref().unwrap_or(""),
        record.content_hindi.as_deref().unwrap_or(""),
        record.subject_marathi.as_deref().unwrap_or(""),
        record.content_marathi.as_deref().unwrap_or(""),
    ];

    haystacks
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
        || record
            .recipients
            .iter()
            .any(|r| r.to_lowercase().contains(&term))
}

// Date keys compare as calendar instants, the rest as case-sensitive strings
fn compare(a: &EmailRecord, b: &EmailRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::SentDate => a.sent_date.cmp(&b.sent_date),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::From => a.from.cmp(&b.from),
        SortKey::Recipients => a.recipients_joined().cmp(&b.recipients_joined()),
        SortKey::Subject => a.subject.cmp(&b.subject),
    }
}

/// Apply the query to the full record set, producing the visible view
///
/// Deterministic for the same inputs; `sort_by` is a stable sort, so ties
/// preserve the relative input order in both directions.
pub fn apply<'a>(records: &'a [EmailRecord], query: &RecordQuery) -> Vec<&'a EmailRecord> {
    let mut visible: Vec<&EmailRecord> =
        records.iter().filter(|r| matches(r, query)).collect();

    visible.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_key);
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    visible
}
