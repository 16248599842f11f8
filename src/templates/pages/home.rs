// templates/pages/home.rs

use crate::page::PageSession;
use crate::site::{BANNER, TREATMENT_AREAS};
use crate::templates::{
    components::{card, gated, notice_modal, status_card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(session: &PageSession) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                (notice_modal(session.modal().state(), "/home"))

                section class="banner" {
                    h1 { (BANNER.0) }
                    p class="lead" { (BANNER.1) }
                }

                (status_card(session.today(), session.status()))

                (gated(session.reveal(), || card("Treatment areas", html! {
                    ul class="treatments" {
                        @for (name, summary) in TREATMENT_AREAS {
                            li { strong { (name) } " - " (summary) }
                        }
                    }
                })))
            }
        },
    )
}
