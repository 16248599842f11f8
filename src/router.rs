use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::page::PageSession;
use crate::templates;
use crate::templates::components::{DISMISS_ACTION, SUPPRESS_ACTION};
use crate::visitor::Visitor;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 8 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let visitor = Visitor::from_cookie_header(
        req.headers()
            .get("Cookie")
            .and_then(|v| v.to_str().ok()),
    );
    let set_cookie = visitor.is_new.then(|| visitor.set_cookie_header());

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect(302, "/home", set_cookie),

        ("GET", "/home" | "/hours") => {
            let session = app.load_page(&visitor);
            html_response(render_page(&path, &session), set_cookie)
        }

        ("POST", SUPPRESS_ACTION) => {
            let form = parse_form(&mut req)?;
            let return_to = form
                .get("return_to")
                .map(String::as_str)
                .filter(|p| is_local_path(p))
                .unwrap_or("/home");

            // The opt-out only applies to a modal that is actually open, so
            // replay the page load and let the presenter do the write.
            let mut session = app.load_page(&visitor);
            if !session.modal().is_open() {
                tracing::debug!("suppress requested with no open notice modal");
            }
            session.suppress_modal_today();

            redirect(303, return_to, set_cookie)
        }

        ("POST", DISMISS_ACTION) => {
            let form = parse_form(&mut req)?;
            let page = match form.get("return_to").map(String::as_str) {
                Some("/hours") => "/hours",
                _ => "/home",
            };

            // Nothing is stored, so a redirect would just reopen the modal.
            let mut session = app.load_page(&visitor);
            session.dismiss_modal();
            html_response(render_page(page, &session), set_cookie)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn render_page(path: &str, session: &PageSession) -> maud::Markup {
    match path {
        "/hours" => templates::pages::hours_page(session),
        _ => templates::pages::home_page(session),
    }
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

/// Only same-site absolute paths; no scheme, no `//host`.
fn is_local_path(p: &str) -> bool {
    p.starts_with('/') && !p.starts_with("//") && !p.contains('\\')
}
