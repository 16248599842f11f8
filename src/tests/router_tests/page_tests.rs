// src/tests/router_tests/page_tests.rs

use crate::domain::modal::NOTICE_LOAD_ERROR;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, closure, cookie_pair, make_app, request, FakeSource, StalledSource,
};
use http::Method;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(5);

// 2025-05-02 is a Friday, 2025-05-04 a Sunday.
const FRIDAY: &str = "2025-05-02";
const SUNDAY: &str = "2025-05-04";

#[test]
fn closure_today_shows_closed_and_all_notices_in_date_order() {
    let source = Arc::new(FakeSource(Ok(vec![
        closure("3", "Saturday closure", "2025-05-03"),
        closure("1", "Thursday closure", "2025-05-01"),
        closure("2", "Friday closure", "2025-05-02"),
    ])));
    let (_dir, app) = make_app(source, FRIDAY, DEADLINE);

    let mut resp = handle(request(Method::GET, "/hours", None, ""), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("The clinic is closed today."));
    assert!(body.contains("<dialog open"));

    let first = body.find("Thursday closure").expect("first notice");
    let second = body.find("Friday closure").expect("second notice");
    let third = body.find("Saturday closure").expect("third notice");
    assert!(first < second && second < third);

    assert!(body.contains("Closed on: 2025-05-01"));
    assert!(body.contains("Posted: 2025-04-25"));
}

#[test]
fn only_three_earliest_notices_are_shown() {
    let source = Arc::new(FakeSource(Ok(vec![
        closure("a", "Closure A", "2025-05-10"),
        closure("b", "Closure B", "2025-05-01"),
        closure("c", "Closure C", "2025-05-01"),
        closure("d", "Closure D", "2025-06-01"),
    ])));
    let (_dir, app) = make_app(source, FRIDAY, DEADLINE);

    let mut resp = handle(request(Method::GET, "/home", None, ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(!body.contains("Closure D"));
    let b = body.find("Closure B").unwrap();
    let c = body.find("Closure C").unwrap();
    let a = body.find("Closure A").unwrap();
    assert!(b < c && c < a);
    assert!(body.contains("The clinic is open today."));
}

#[test]
fn sunday_is_closed_even_when_the_api_is_down() {
    let source = Arc::new(FakeSource(Err("connection refused".into())));
    let (_dir, app) = make_app(source, SUNDAY, DEADLINE);

    let mut resp = handle(request(Method::GET, "/hours", None, ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("The clinic is closed today."));
    assert!(body.contains("09:00 - 16:00"));
}

#[test]
fn api_outage_fails_open_with_inline_error() {
    let source = Arc::new(FakeSource(Err("connection refused".into())));
    let (_dir, app) = make_app(source, FRIDAY, DEADLINE);

    let mut resp = handle(request(Method::GET, "/hours", None, ""), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("The clinic is open today."));
    assert!(body.contains(NOTICE_LOAD_ERROR));
    assert!(!body.contains("<dialog"));
    // gated schedule is revealed regardless
    assert!(body.contains("09:00 - 16:00"));
}

#[test]
fn no_notices_means_no_modal_and_no_error() {
    let source = Arc::new(FakeSource(Ok(vec![])));
    let (_dir, app) = make_app(source, FRIDAY, DEADLINE);

    let mut resp = handle(request(Method::GET, "/home", None, ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(!body.contains("<dialog"));
    assert!(!body.contains(NOTICE_LOAD_ERROR));
    assert!(body.contains("Treatment areas"));
}

#[test]
fn unanswered_requests_render_placeholders() {
    let source = Arc::new(StalledSource {
        gate: Mutex::new(()),
    });
    let held = source.gate.lock().unwrap();
    let (_dir, app) = make_app(source.clone(), FRIDAY, Duration::from_millis(200));

    let mut resp = handle(request(Method::GET, "/hours", None, ""), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Checking today's clinic status..."));
    assert!(body.contains("Loading notices..."));
    assert!(body.contains("section-placeholder"));
    assert!(!body.contains("09:00 - 16:00"));

    drop(held);
}

#[test]
fn root_redirects_home() {
    let (_dir, app) = make_app(Arc::new(FakeSource(Ok(vec![]))), FRIDAY, DEADLINE);

    let resp = handle(request(Method::GET, "/", None, ""), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/home");
}

#[test]
fn unknown_route_is_not_found() {
    let (_dir, app) = make_app(Arc::new(FakeSource(Ok(vec![]))), FRIDAY, DEADLINE);

    let result = handle(request(Method::GET, "/admin", None, ""), &app);

    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn visitor_cookie_is_issued_once() {
    let (_dir, app) = make_app(Arc::new(FakeSource(Ok(vec![]))), FRIDAY, DEADLINE);

    let first = handle(request(Method::GET, "/home", None, ""), &app).unwrap();
    let pair = cookie_pair(&first).expect("new visitor gets a cookie");
    assert!(pair.starts_with("clinic_client="));

    let again = handle(request(Method::GET, "/home", Some(&pair), ""), &app).unwrap();
    assert!(cookie_pair(&again).is_none());
}
