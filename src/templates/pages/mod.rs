pub mod home;
pub mod hours;

pub use home::home_page;
pub use hours::hours_page;
