// templates/pages/hours.rs

use crate::page::PageSession;
use crate::site::{CLINIC_PHONE, PRACTICE_NOTES, WEEKLY_SCHEDULE};
use crate::templates::{
    components::{gated, notice_modal, status_card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn hours_page(session: &PageSession) -> Markup {
    desktop_layout(
        "Hours",
        html! {
            main class="container" {
                (notice_modal(session.modal().state(), "/hours"))

                h1 { "Opening hours" }

                (status_card(session.today(), session.status()))

                (gated(session.reveal(), || html! {
                    div class="grid" {
                        table class="schedule" {
                            tbody {
                                @for row in WEEKLY_SCHEDULE {
                                    tr {
                                        td { (row.days) }
                                        td { (row.hours) }
                                    }
                                }
                            }
                        }
                        div class="card" {
                            h2 { "Please note" }
                            ul {
                                @for note in PRACTICE_NOTES {
                                    li { (note) }
                                }
                            }
                            h2 { "Appointments" }
                            p class="phone" { (CLINIC_PHONE) }
                        }
                    }
                }))
            }
        },
    )
}
