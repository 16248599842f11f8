// src/suppression.rs
use chrono::NaiveDate;

use crate::clock::date_string;
use crate::errors::ServerError;

/// Slot holding the date the visitor last chose "do not show today".
pub const LAST_SHOWN_KEY: &str = "noticeLastShown";

/// A durable string slot scoped to one visitor.
pub trait SlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn write(&self, key: &str, value: &str) -> Result<(), ServerError>;
}

/// Daily opt-out for the notice modal. Expiry is implicit: a stored date
/// only counts when it is exactly today's date string.
///
/// `today` is fixed at construction so one page load never sees two dates.
pub struct SuppressionStore {
    slots: Box<dyn SlotStorage>,
    today: NaiveDate,
}

impl SuppressionStore {
    pub fn new(slots: Box<dyn SlotStorage>, today: NaiveDate) -> Self {
        Self { slots, today }
    }

    /// Unreadable storage counts as "not suppressed".
    pub fn is_suppressed_today(&self) -> bool {
        let today = date_string(self.today);

        match self.slots.read(LAST_SHOWN_KEY) {
            Ok(Some(stored)) => stored == today,
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "could not read notice suppression, showing notices");
                false
            }
        }
    }

    /// Overwrites the slot with today's date.
    pub fn suppress_today(&self) -> Result<(), ServerError> {
        self.slots.write(LAST_SHOWN_KEY, &date_string(self.today))
    }
}

#[cfg(test)]
pub use memory::MemorySlots;
