// src/config.rs
use chrono::Weekday;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    /// Base URL of the announcement API, e.g. "http://localhost:8080/api".
    pub api_base: String,
    pub request_timeout: Duration,
    /// How long a page waits for the status and notice paths before rendering.
    pub render_deadline: Duration,
    /// The one weekday the clinic never operates.
    pub closed_weekday: Weekday,
    pub max_workers: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "clinic.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            api_base: "http://localhost:8080/api".to_string(),
            request_timeout: Duration::from_millis(10_000),
            render_deadline: Duration::from_millis(12_000),
            closed_weekday: Weekday::Sun,
            max_workers: 8,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults,
    /// unparsable ones are logged and also keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let request_timeout_ms = parse_or(
            &lookup,
            "CLINIC_REQUEST_TIMEOUT_MS",
            defaults.request_timeout.as_millis() as u64,
        );
        let render_deadline_ms = parse_or(
            &lookup,
            "CLINIC_RENDER_DEADLINE_MS",
            defaults.render_deadline.as_millis() as u64,
        );

        let config = Self {
            listen_addr: parse_or(&lookup, "CLINIC_LISTEN_ADDR", defaults.listen_addr),
            db_path: lookup("CLINIC_DB_PATH").unwrap_or(defaults.db_path),
            schema_path: lookup("CLINIC_SCHEMA_PATH").unwrap_or(defaults.schema_path),
            api_base: lookup("CLINIC_API_BASE").unwrap_or(defaults.api_base),
            request_timeout: Duration::from_millis(request_timeout_ms),
            render_deadline: Duration::from_millis(render_deadline_ms),
            closed_weekday: parse_or(&lookup, "CLINIC_CLOSED_WEEKDAY", defaults.closed_weekday),
            max_workers: parse_or(&lookup, "CLINIC_MAX_WORKERS", defaults.max_workers),
        };

        if !config.deadline_covers_timeout() {
            tracing::warn!(
                render_deadline_ms = render_deadline_ms,
                request_timeout_ms = request_timeout_ms,
                "render deadline is shorter than the request timeout; \
                 slow answers will render as pending instead of as failures"
            );
        }
        config
    }

    /// A page should wait at least as long as one API request may take,
    /// otherwise a timed-out fetch shows a spinner rather than its error.
    pub fn deadline_covers_timeout(&self) -> bool {
        self.render_deadline >= self.request_timeout
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "invalid config value, using default");
                default
            }
        },
    }
}
