// src/catalog/seed.rs
use crate::catalog::{ListingSource, SourceError};
use crate::domain::Listing;

const SEED_LISTINGS: &str = include_str!("../../data/listings.json");

/// Listings bundled into the binary. Used when no database or remote
/// source is configured.
#[derive(Debug, Default)]
pub struct StaticSource;

impl ListingSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<Vec<Listing>, SourceError> {
        parse_listings(SEED_LISTINGS)
    }
}

/// Parses a JSON array of listings.
pub fn parse_listings(json: &str) -> Result<Vec<Listing>, SourceError> {
    serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))
}
