use chrono::NaiveDate;
use maud::{html, Markup};

use crate::clock::date_string;
use crate::domain::OperatingStatus;

/// Today's status banner. `None` means the check has not completed yet.
pub fn status_card(today: NaiveDate, status: Option<OperatingStatus>) -> Markup {
    html! {
        @match status {
            None => div class="status-card pending" aria-busy="true" {
                p { "Checking today's clinic status..." }
            },
            Some(OperatingStatus::Closed) => div class="status-card closed" {
                p class="today" { (date_string(today)) }
                p { "The clinic is closed today." }
            },
            Some(OperatingStatus::Open) => div class="status-card open" {
                p class="today" { (date_string(today)) }
                p { "The clinic is open today." }
            },
        }
    }
}
