use crate::announcements::{Announcement, AnnouncementSource, FetchError};
use crate::app::App;
use crate::clock::FixedClock;
use crate::config::SiteConfig;
use crate::db::{init_db, Database};
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Serves a fixed list, or fails, every time.
pub struct FakeSource(pub Result<Vec<Announcement>, String>);

impl AnnouncementSource for FakeSource {
    fn fetch_all(&self) -> Result<Vec<Announcement>, FetchError> {
        self.0.clone().map_err(FetchError::Network)
    }
}

/// Never answers while the test holds `gate`.
pub struct StalledSource {
    pub gate: Mutex<()>,
}

impl AnnouncementSource for StalledSource {
    fn fetch_all(&self) -> Result<Vec<Announcement>, FetchError> {
        let _held = self.gate.lock().unwrap();
        Ok(vec![])
    }
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn closure(id: &str, title: &str, date: &str) -> Announcement {
    Announcement {
        id: id.into(),
        title: title.into(),
        body: format!("{title}: no appointments."),
        applied_date: Some(day(date)),
        published_at: Some("2025-04-25T09:00:00".into()),
    }
}

/// App over a fresh temp DB with the production schema.
pub fn make_app(
    source: Arc<dyn AnnouncementSource>,
    today: &str,
    render_deadline: Duration,
) -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = Database::new(dir.path().join("clinic_test.sqlite"));
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");

    let config = SiteConfig {
        render_deadline,
        ..SiteConfig::default()
    };
    let app = App::new(db, source, Arc::new(FixedClock(day(today))), &config);
    (dir, app)
}

pub fn request(method: Method, uri: &str, cookie: Option<&str>, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    if let Some(c) = cookie {
        req.headers_mut().insert("Cookie", c.parse().unwrap());
    }
    if !body.is_empty() {
        req.headers_mut().insert(
            "Content-Type",
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
    }
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// `name=value` part of the response's Set-Cookie header.
pub fn cookie_pair(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    header.split(';').next().map(str::to_string)
}
