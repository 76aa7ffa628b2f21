pub mod filter;
pub mod listing;
pub mod paginator;
pub mod price;
pub mod sort;

pub use filter::{filter_listings, FilterCriteria};
pub use listing::{Category, Listing, ListingDetails, ListingKind};
pub use paginator::{LoadOutcome, LoadTicket, Paginator, PaginationError, Phase};
pub use price::PriceBucket;
pub use sort::{sort_listings, SortKey};
