pub mod modal;
pub mod reveal;
pub mod status;

pub use modal::{ModalPresenter, ModalState};
pub use reveal::RevealCoordinator;
pub use status::{OperatingStatus, StatusResolver};
