// src/app.rs
use std::sync::Arc;
use std::time::Duration;

use crate::announcements::{AnnouncementSource, FetchError, HttpAnnouncementStore};
use crate::clock::{Clock, LocalClock};
use crate::config::SiteConfig;
use crate::db::{Database, SqliteSlots};
use crate::domain::StatusResolver;
use crate::page::{PageDeps, PageSession};
use crate::visitor::Visitor;

/// Everything a request handler needs. Shared by all server workers.
pub struct App {
    pub db: Database,
    pub deps: PageDeps,
    pub render_deadline: Duration,
}

impl App {
    pub fn new(
        db: Database,
        source: Arc<dyn AnnouncementSource>,
        clock: Arc<dyn Clock>,
        config: &SiteConfig,
    ) -> Self {
        Self {
            db,
            deps: PageDeps {
                source,
                clock,
                resolver: StatusResolver::new(config.closed_weekday),
            },
            render_deadline: config.render_deadline,
        }
    }

    /// Production wiring: HTTP announcement API and the local wall clock.
    pub fn from_config(config: &SiteConfig) -> Result<Self, FetchError> {
        let store = HttpAnnouncementStore::new(&config.api_base, config.request_timeout)?;
        tracing::info!(endpoint = %store.endpoint(), "announcement source configured");

        Ok(Self::new(
            Database::new(&config.db_path),
            Arc::new(store),
            Arc::new(LocalClock),
            config,
        ))
    }

    /// Enters a page and waits (up to the render deadline) for it to settle.
    pub fn load_page(&self, visitor: &Visitor) -> PageSession {
        let slots = SqliteSlots::new(self.db.clone(), visitor.hash());
        let mut session = PageSession::enter(&self.deps, Box::new(slots));
        session.settle(self.render_deadline);
        session
    }
}
