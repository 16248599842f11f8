use maud::{html, Markup};

use crate::domain::reveal::Readiness;
use crate::domain::RevealCoordinator;

/// Renders `section` once the page is revealed, a loading placeholder before.
pub fn gated<F>(reveal: &RevealCoordinator, section: F) -> Markup
where
    F: FnOnce() -> Markup,
{
    match reveal.state() {
        Readiness::Ready => section(),
        Readiness::Pending => html! {
            div class="section-placeholder" aria-busy="true" {
                span class="spinner" aria-hidden="true" {}
                p { "Loading..." }
            }
        },
    }
}
