pub mod connection;
pub mod slots;

pub use connection::{init_db, Database};
pub use slots::SqliteSlots;
