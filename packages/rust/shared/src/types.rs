//! Core domain types for Faky content entries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EntryDefaults
// ---------------------------------------------------------------------------

/// Every fallback applied to a content file's front matter, in one place.
///
/// Parsers consult this record once per file; nothing else in the codebase
/// invents a default for entry metadata.
#[derive(Debug, Clone, Copy)]
pub struct EntryDefaults {
    /// Title used when `title` is absent or blank.
    pub title: &'static str,
    /// Description used when `description` is absent.
    pub description: &'static str,
    /// Publication date used when `date` is absent. A fixed sentinel keeps
    /// listings reproducible and sorts undated entries last.
    pub date: &'static str,
    /// Entries are published unless they say `published: false`.
    pub published: bool,
    /// Entries are drafts only if they say `draft: true`.
    pub draft: bool,
}

impl EntryDefaults {
    /// The defaults every content file is parsed with.
    pub const STANDARD: Self = Self {
        title: "Untitled",
        description: "",
        date: "1970-01-01T00:00:00Z",
        published: true,
        draft: false,
    };
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ---------------------------------------------------------------------------
// EntryMeta / Entry
// ---------------------------------------------------------------------------

/// Listing projection of a content entry (everything but the body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMeta {
    /// File stem; unique lookup key and public locator.
    pub identifier: String,
    /// Display title.
    pub title: String,
    /// Short summary shown in listings and page metadata.
    pub description: String,
    /// ISO-8601 date or date-time, as authored.
    pub date: String,
    /// Author-supplied tags, in authored order.
    pub tags: Vec<String>,
    /// Whether the entry appears in listings.
    pub published: bool,
    /// Whether the author marked the entry as a draft.
    pub draft: bool,
    /// Derived `"<N> min read"` estimate.
    pub reading_time: String,
}

impl EntryMeta {
    /// Publication date as Unix milliseconds; `0` when the date cannot be parsed.
    pub fn timestamp_millis(&self) -> i64 {
        parse_timestamp_millis(&self.date).unwrap_or(0)
    }

    /// Long-form date for display (`"January 1, 2024"`), or the raw string
    /// when it cannot be parsed.
    pub fn display_date(&self) -> String {
        match parse_timestamp_millis(&self.date).and_then(DateTime::<Utc>::from_timestamp_millis) {
            Some(dt) => dt.format("%B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A fully resolved entry, including its markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    /// Markdown body following the front matter block.
    pub body: String,
}

/// Parse an ISO-8601 date or date-time into Unix milliseconds.
///
/// Accepts RFC 3339 timestamps, zone-less date-times (read as UTC), and bare
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}
