mod remote;
mod seed;

pub use remote::RemoteSource;
pub use seed::StaticSource;

use crate::domain::{Listing, ListingKind};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not parse listings: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Db(String),

    #[error("Duplicate listing id {0}")]
    DuplicateId(i64),
}

/// Anything that can hand over the raw listing collection, in feed order.
pub trait ListingSource {
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<Vec<Listing>, SourceError>;
}

/// The immutable listing collection every feed reads from.
/// Cloning is cheap; all clones share the same listings.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[Arc<Listing>]>,
}

impl Catalog {
    pub fn load(source: &dyn ListingSource) -> Result<Self, SourceError> {
        let listings = source.fetch()?;
        let catalog = Self::from_listings(listings)?;

        info!(
            source = source.name(),
            posts = catalog.count(ListingKind::Post),
            products = catalog.count(ListingKind::Product),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Normalizes prices and rejects repeated ids.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, SourceError> {
        let mut seen = HashSet::with_capacity(listings.len());
        let mut out = Vec::with_capacity(listings.len());

        for listing in listings {
            if !seen.insert(listing.id) {
                return Err(SourceError::DuplicateId(listing.id));
            }
            out.push(Arc::new(listing.normalize()));
        }

        Ok(Self {
            listings: out.into(),
        })
    }

    pub fn listings(&self) -> &[Arc<Listing>] {
        &self.listings
    }

    pub fn count(&self, kind: ListingKind) -> usize {
        self.listings.iter().filter(|l| l.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
