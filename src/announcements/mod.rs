mod models;
mod selector;
mod store;
mod store_error;

pub use models::Announcement;
pub use selector::select;
pub use store::{AnnouncementSource, HttpAnnouncementStore};
pub use store_error::FetchError;
