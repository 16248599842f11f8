use chrono::NaiveDate;
use serde::Deserialize;

use crate::clock::DATE_FORMAT;

// notices[]
//  ├── id            number | string
//  ├── title
//  ├── body          (older API: "content")
//  ├── appliedDate   "2025-05-01" | "2025-05-01T00:00:00" | missing
//  └── publishedAt   (older API: "createdAt")

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRecord {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    pub applied_date: Option<String>,
    #[serde(alias = "createdAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

/// A dated closure notice as the rest of the site sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Day the clinic is closed. `None` when the source sent nothing usable.
    pub applied_date: Option<NaiveDate>,
    /// Display only.
    pub published_at: Option<String>,
}

impl From<AnnouncementRecord> for Announcement {
    fn from(rec: AnnouncementRecord) -> Self {
        let id = match rec.id {
            RecordId::Number(n) => n.to_string(),
            RecordId::Text(s) => s,
        };

        Self {
            id,
            title: rec.title,
            body: rec.body,
            applied_date: rec.applied_date.as_deref().and_then(parse_calendar_date),
            published_at: rec.published_at,
        }
    }
}

impl Announcement {
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.applied_date == Some(day)
    }

    /// Date part of `published_at`, or the raw value if it is not a date.
    pub fn published_label(&self) -> Option<String> {
        let raw = self.published_at.as_deref()?;
        Some(
            parse_calendar_date(raw)
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| raw.to_string()),
        )
    }
}

/// Reads a calendar date, discarding any time-of-day component.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day_part = raw.split(['T', ' ']).next().unwrap_or(raw);

    NaiveDate::parse_from_str(day_part, DATE_FORMAT).ok()
}
