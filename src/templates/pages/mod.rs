pub mod feed;
pub mod home;

pub use feed::{feed_page, feed_partial};
pub use home::home_page;
