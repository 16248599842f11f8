// src/page.rs
use chrono::NaiveDate;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::announcements::{self, Announcement, AnnouncementSource, FetchError};
use crate::clock::Clock;
use crate::domain::{ModalPresenter, OperatingStatus, RevealCoordinator, StatusResolver};
use crate::suppression::{SlotStorage, SuppressionStore};

/// Shared, long-lived collaborators every page session draws on.
#[derive(Clone)]
pub struct PageDeps {
    pub source: Arc<dyn AnnouncementSource>,
    pub clock: Arc<dyn Clock>,
    pub resolver: StatusResolver,
}

#[derive(Debug)]
enum PageEvent {
    StatusResolved(OperatingStatus),
    NoticesLoaded(Result<Vec<Announcement>, FetchError>),
}

/// State of one page load.
///
/// The status check and the notice fetch run on their own threads and
/// report back over a channel; only the session mutates component state.
/// Neither path waits on the other.
pub struct PageSession {
    today: NaiveDate,
    status: Option<OperatingStatus>,
    reveal: RevealCoordinator,
    modal: ModalPresenter,
    suppression: SuppressionStore,
    events: Receiver<PageEvent>,
    outstanding: usize,
}

impl PageSession {
    /// Starts both paths. Returns immediately.
    ///
    /// The clock is read exactly once here; the status check and the
    /// visitor's suppression slot both see that date.
    pub fn enter(deps: &PageDeps, slots: Box<dyn SlotStorage>) -> Self {
        let today = deps.clock.today();
        let suppression = SuppressionStore::new(slots, today);
        let (tx, events) = mpsc::channel();

        let status_tx = tx.clone();
        let source = Arc::clone(&deps.source);
        let resolver = deps.resolver;
        thread::spawn(move || {
            resolver.resolve_then(today, source.as_ref(), |status| {
                // The session may already be gone; nobody is left to tell.
                let _ = status_tx.send(PageEvent::StatusResolved(status));
            });
        });

        let source = Arc::clone(&deps.source);
        thread::spawn(move || {
            let outcome = source.fetch_all().map(|all| announcements::select(&all));
            let _ = tx.send(PageEvent::NoticesLoaded(outcome));
        });

        tracing::debug!(%today, "page session started");

        Self {
            today,
            status: None,
            reveal: RevealCoordinator::new(),
            modal: ModalPresenter::new(),
            suppression,
            events,
            outstanding: 2,
        }
    }

    /// Applies events as they arrive until both paths have reported or
    /// `deadline` has elapsed. Whatever is still outstanding stays pending.
    pub fn settle(&mut self, deadline: Duration) {
        let until = Instant::now() + deadline;

        while self.outstanding > 0 {
            let remaining = until.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(event) => self.dispatch(event),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        outstanding = self.outstanding,
                        "render deadline reached, rendering pending sections"
                    );
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::error!("page worker exited without reporting");
                    break;
                }
            }
        }
    }

    fn dispatch(&mut self, event: PageEvent) {
        self.outstanding = self.outstanding.saturating_sub(1);

        match event {
            PageEvent::StatusResolved(status) => {
                self.status = Some(status);
                if self.reveal.mark_ready() {
                    tracing::debug!(?status, "status resolved, revealing page");
                }
            }
            PageEvent::NoticesLoaded(outcome) => {
                self.modal.on_selection(outcome, &self.suppression);
            }
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// `None` until the status check has completed.
    pub fn status(&self) -> Option<OperatingStatus> {
        self.status
    }

    pub fn reveal(&self) -> &RevealCoordinator {
        &self.reveal
    }

    pub fn modal(&self) -> &ModalPresenter {
        &self.modal
    }

    pub fn dismiss_modal(&mut self) {
        self.modal.dismiss();
    }

    pub fn suppress_modal_today(&mut self) {
        self.modal.suppress_today(&self.suppression);
    }
}
