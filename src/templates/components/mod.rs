use maud::{html, Markup};

pub mod error;
pub mod gated;
pub mod notice_modal;
pub mod status_card;

pub use error::html_error_response;
pub use gated::gated;
pub use notice_modal::{notice_modal, DISMISS_ACTION, SUPPRESS_ACTION};
pub use status_card::status_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
