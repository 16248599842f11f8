use maud::{html, Markup};

use crate::clock::DATE_FORMAT;
use crate::domain::ModalState;

pub const SUPPRESS_ACTION: &str = "/notice/suppress-today";
pub const DISMISS_ACTION: &str = "/notice/dismiss";

/// The notice dialog. `return_to` is the page both action forms come back to.
pub fn notice_modal(state: &ModalState, return_to: &str) -> Markup {
    html! {
        @match state {
            ModalState::Closed => {},
            ModalState::Loading => div class="notice-loading" aria-busy="true" {
                span class="spinner" aria-hidden="true" {}
                p { "Loading notices..." }
            },
            ModalState::Error(message) => div class="notice-error" role="alert" {
                p { (message) }
            },
            ModalState::Open(notices) => dialog open class="notice-modal" id="notice-modal" {
                h2 { "Clinic notices" }

                @for notice in notices {
                    article class="notice" data-id=(notice.id) {
                        h3 { (notice.title) }
                        p class="notice-body" { (notice.body) }
                        div class="notice-dates" {
                            @if let Some(day) = notice.applied_date {
                                p { "Closed on: " (day.format(DATE_FORMAT).to_string()) }
                            }
                            @if let Some(posted) = notice.published_label() {
                                p { "Posted: " (posted) }
                            }
                        }
                    }
                }

                div class="notice-actions" {
                    form method="post" action=(SUPPRESS_ACTION) {
                        input type="hidden" name="return_to" value=(return_to);
                        label {
                            input type="checkbox" name="do_not_show_today" value="1" onchange="this.form.submit()";
                            " Do not show again today"
                        }
                        noscript { button type="submit" { "Save" } }
                    }
                    form method="post" action=(DISMISS_ACTION) {
                        input type="hidden" name="return_to" value=(return_to);
                        button type="submit" { "Close" }
                    }
                }
            },
        }
    }
}
