// src/domain/modal.rs
use crate::announcements::{Announcement, FetchError};
use crate::suppression::SuppressionStore;

/// Shown in place of the notices when they could not be loaded.
pub const NOTICE_LOAD_ERROR: &str = "Could not load clinic notices. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Loading,
    Error(String),
    Closed,
    /// Selected notices, in display order.
    Open(Vec<Announcement>),
}

/// Decides whether the notice modal appears and applies the visitor's
/// close / "do not show today" choices.
///
/// ```text
/// Loading --fetch failed-------------------------> Error
/// Loading --selection empty, or suppressed today-> Closed
/// Loading --selection non-empty------------------> Open
/// Open    --dismiss------------------------------> Closed
/// Open    --suppress_today (write, then close)---> Closed
/// ```
/// Any other event leaves the state alone.
#[derive(Debug)]
pub struct ModalPresenter {
    state: ModalState,
}

impl Default for ModalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalPresenter {
    pub fn new() -> Self {
        Self {
            state: ModalState::Loading,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Feeds the outcome of the notice fetch (already passed through the
    /// selector). Only the first outcome counts.
    pub fn on_selection(
        &mut self,
        selection: Result<Vec<Announcement>, FetchError>,
        suppression: &SuppressionStore,
    ) {
        if self.state != ModalState::Loading {
            tracing::debug!("notice outcome arrived after the modal settled, ignoring");
            return;
        }

        self.state = match selection {
            Err(e) => {
                tracing::error!(error = %e, "failed to load notices");
                ModalState::Error(NOTICE_LOAD_ERROR.to_string())
            }
            Ok(notices) if notices.is_empty() => ModalState::Closed,
            Ok(_) if suppression.is_suppressed_today() => ModalState::Closed,
            Ok(notices) => ModalState::Open(notices),
        };
    }

    /// Plain close, nothing persisted.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.state = ModalState::Closed;
        }
    }

    /// Records today's opt-out, then closes. A failed write is logged and
    /// the modal closes anyway.
    pub fn suppress_today(&mut self, suppression: &SuppressionStore) {
        if !self.is_open() {
            return;
        }

        if let Err(e) = suppression.suppress_today() {
            tracing::warn!(error = %e, "could not persist notice suppression");
        }
        self.state = ModalState::Closed;
    }
}
