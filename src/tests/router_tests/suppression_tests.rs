// src/tests/router_tests/suppression_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, closure, cookie_pair, make_app, request, FakeSource};
use http::Method;
use std::sync::Arc;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(5);

fn notices() -> Arc<FakeSource> {
    Arc::new(FakeSource(Ok(vec![closure("1", "Staff training", "2025-05-09")])))
}

#[test]
fn do_not_show_today_sticks_for_the_visitor() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, app) = make_app(notices(), "2025-05-02", DEADLINE);

    let mut first = handle(request(Method::GET, "/hours", None, ""), &app)?;
    let cookie = cookie_pair(&first).expect("cookie");
    assert!(body_string(&mut first).contains("<dialog open"));

    let resp = handle(
        request(
            Method::POST,
            "/notice/suppress-today",
            Some(&cookie),
            "return_to=%2Fhours&do_not_show_today=1",
        ),
        &app,
    )?;
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/hours");

    let mut reload = handle(request(Method::GET, "/hours", Some(&cookie), ""), &app)?;
    assert!(!body_string(&mut reload).contains("<dialog"));

    // a different visitor still sees it
    let mut other = handle(request(Method::GET, "/hours", None, ""), &app)?;
    assert!(body_string(&mut other).contains("<dialog open"));

    // and so does the same visitor tomorrow
    let (_dir2, tomorrow) = make_app(notices(), "2025-05-03", DEADLINE);
    let tomorrow = crate::app::App {
        db: app.db.clone(),
        ..tomorrow
    };
    let mut next_day = handle(request(Method::GET, "/hours", Some(&cookie), ""), &tomorrow)?;
    assert!(body_string(&mut next_day).contains("<dialog open"));

    drop(dir);
    Ok(())
}

#[test]
fn suppressing_without_cookie_issues_one() {
    let (_dir, app) = make_app(notices(), "2025-05-02", DEADLINE);

    let resp = handle(
        request(Method::POST, "/notice/suppress-today", None, "return_to=%2Fhome"),
        &app,
    )
    .unwrap();
    let cookie = cookie_pair(&resp).expect("cookie");

    let mut reload = handle(request(Method::GET, "/home", Some(&cookie), ""), &app).unwrap();
    assert!(!body_string(&mut reload).contains("<dialog"));
}

#[test]
fn off_site_return_to_falls_back_home() {
    let (_dir, app) = make_app(notices(), "2025-05-02", DEADLINE);

    let resp = handle(
        request(
            Method::POST,
            "/notice/suppress-today",
            None,
            "return_to=https%3A%2F%2Fevil.example",
        ),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/home");
}

#[test]
fn close_hides_the_modal_for_this_page_only() {
    let (_dir, app) = make_app(notices(), "2025-05-02", DEADLINE);

    let first = handle(request(Method::GET, "/home", None, ""), &app).unwrap();
    let cookie = cookie_pair(&first).expect("cookie");

    let mut closed = handle(
        request(Method::POST, "/notice/dismiss", Some(&cookie), "return_to=%2Fhours"),
        &app,
    )
    .unwrap();
    assert_eq!(closed.status(), 200);
    let body = body_string(&mut closed);
    assert!(!body.contains("<dialog"));
    // rendered the page it came from
    assert!(body.contains("09:00 - 16:00"));

    let mut reload = handle(request(Method::GET, "/hours", Some(&cookie), ""), &app).unwrap();
    assert!(body_string(&mut reload).contains("<dialog open"));
}

#[test]
fn close_form_posts_back_to_the_server() {
    let (_dir, app) = make_app(notices(), "2025-05-02", DEADLINE);

    let mut resp = handle(request(Method::GET, "/hours", None, ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains(r#"action="/notice/dismiss""#));
    assert!(body.contains(r#"action="/notice/suppress-today""#));
    assert!(!body.contains(r#"method="dialog""#));
}

#[test]
fn suppressing_with_nothing_to_show_stores_nothing() {
    let (dir, quiet) = make_app(Arc::new(FakeSource(Ok(vec![]))), "2025-05-02", DEADLINE);

    let resp = handle(
        request(Method::POST, "/notice/suppress-today", None, "return_to=%2Fhome"),
        &quiet,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    let cookie = cookie_pair(&resp).expect("cookie");

    // notices show up later the same day; the earlier request did not opt out
    let (_dir2, busy) = make_app(notices(), "2025-05-02", DEADLINE);
    let busy = crate::app::App {
        db: quiet.db.clone(),
        ..busy
    };
    let mut page = handle(request(Method::GET, "/home", Some(&cookie), ""), &busy).unwrap();
    assert!(body_string(&mut page).contains("<dialog open"));

    drop(dir);
}
