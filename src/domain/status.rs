// src/domain/status.rs
use chrono::{Datelike, NaiveDate, Weekday};

use crate::announcements::AnnouncementSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingStatus {
    Open,
    Closed,
}

/// Decides whether the clinic operates on a given day: closed every
/// `closed_weekday`, otherwise closed iff some announcement falls on it.
#[derive(Debug, Clone, Copy)]
pub struct StatusResolver {
    closed_weekday: Weekday,
}

impl StatusResolver {
    pub fn new(closed_weekday: Weekday) -> Self {
        Self { closed_weekday }
    }

    /// Resolves today's status. A failed fetch resolves `Open`.
    pub fn resolve(&self, today: NaiveDate, source: &dyn AnnouncementSource) -> OperatingStatus {
        if today.weekday() == self.closed_weekday {
            tracing::debug!(%today, "weekly closing day, skipping announcement fetch");
            return OperatingStatus::Closed;
        }

        match source.fetch_all() {
            Ok(announcements) => {
                if announcements.iter().any(|a| a.falls_on(today)) {
                    OperatingStatus::Closed
                } else {
                    OperatingStatus::Open
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "closure check failed, assuming open");
                OperatingStatus::Open
            }
        }
    }

    /// Runs [`resolve`](Self::resolve) and hands the result to `on_complete`,
    /// which therefore fires exactly once whichever path was taken.
    pub fn resolve_then<F>(&self, today: NaiveDate, source: &dyn AnnouncementSource, on_complete: F)
    where
        F: FnOnce(OperatingStatus),
    {
        let status = self.resolve(today, source);
        on_complete(status);
    }
}
