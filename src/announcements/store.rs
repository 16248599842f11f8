// store.rs
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

use super::models::{Announcement, AnnouncementRecord};
use super::store_error::FetchError;

const USER_AGENT: &str = concat!("clinic-site/", env!("CARGO_PKG_VERSION"));

/// Read-only access to the current announcement collection.
pub trait AnnouncementSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Announcement>, FetchError>;
}

/// Fetches `GET {api_base}/notices` from the clinic API.
pub struct HttpAnnouncementStore {
    client: Client,
    endpoint: Url,
}

impl HttpAnnouncementStore {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: notices_url(api_base)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AnnouncementSource for HttpAnnouncementStore {
    fn fetch_all(&self) -> Result<Vec<Announcement>, FetchError> {
        let resp = self.client.get(self.endpoint.clone()).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text()?;
        decode_announcements(&text)
    }
}

/// The body must be a JSON array; individual records may be sloppy.
pub fn decode_announcements(text: &str) -> Result<Vec<Announcement>, FetchError> {
    let records: Vec<AnnouncementRecord> =
        serde_json::from_str(text).map_err(|e| FetchError::JsonParse(e.to_string()))?;

    Ok(records.into_iter().map(Announcement::from).collect())
}

fn notices_url(api_base: &str) -> Result<Url, FetchError> {
    // Url::join replaces the last segment unless the base ends in '/'.
    let mut base = api_base.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base)
        .and_then(|u| u.join("notices"))
        .map_err(|e| FetchError::BadUrl(format!("{api_base}: {e}")))
}
