// src/clock.rs
use chrono::{Local, NaiveDate};

/// Format used wherever a calendar date travels as a string.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today". Read once per page session.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock of the machine serving the page.
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
