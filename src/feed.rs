// src/feed.rs
//! Turns a feed request (query string) into a paginator positioned on the
//! requested page.

use crate::catalog::Catalog;
use crate::domain::{Category, FilterCriteria, ListingKind, Paginator, PriceBucket, SortKey};
use crate::errors::ServerError;
use url::form_urlencoded;

/// Filters, sort and page requested by the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    /// 1-based; how many pages should be revealed.
    pub page: usize,
}

impl FeedQuery {
    pub fn new(kind: ListingKind) -> Self {
        Self {
            criteria: FilterCriteria::for_kind(kind),
            sort: SortKey::default(),
            page: 1,
        }
    }

    pub fn parse(kind: ListingKind, query: Option<&str>) -> Result<Self, ServerError> {
        let mut out = Self::new(kind);
        let Some(query) = query else {
            return Ok(out);
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match &*key {
                "category" => {
                    out.criteria.category = if value.is_empty() || value.eq_ignore_ascii_case("all") {
                        None
                    } else {
                        Some(value.parse::<Category>().map_err(ServerError::BadRequest)?)
                    };
                }
                "location" => {
                    out.criteria.location = Some(value.to_string()).filter(|s| !s.is_empty());
                }
                "price" => {
                    out.criteria.price_bucket = if value.is_empty() || value.eq_ignore_ascii_case("all") {
                        None
                    } else {
                        Some(value.parse::<PriceBucket>().map_err(ServerError::BadRequest)?)
                    };
                }
                "sort" => {
                    if !value.is_empty() {
                        out.sort = value.parse().map_err(ServerError::BadRequest)?;
                    }
                }
                "page" => {
                    out.page = value
                        .parse()
                        .ok()
                        .filter(|p: &usize| *p >= 1)
                        .ok_or_else(|| ServerError::BadRequest(format!("invalid page '{value}'")))?;
                }
                "in_stock" => out.criteria.in_stock = is_checked(value),
                "organic" => out.criteria.organic = is_checked(value),
                "featured" => out.criteria.featured = is_checked(value),
                "verified" => out.criteria.producer_verified = is_checked(value),
                _ => {}
            }
        }

        Ok(out)
    }

    /// Query string reproducing these filters and sort at `page`.
    pub fn to_query_string(&self, page: usize) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        let c = &self.criteria;

        if let Some(category) = c.category {
            ser.append_pair("category", category.as_str());
        }
        if let Some(location) = &c.location {
            ser.append_pair("location", location);
        }
        if let Some(bucket) = c.price_bucket {
            ser.append_pair("price", &bucket.to_string());
        }
        for (name, on) in [
            ("in_stock", c.in_stock),
            ("organic", c.organic),
            ("featured", c.featured),
            ("verified", c.producer_verified),
        ] {
            if on {
                ser.append_pair(name, "1");
            }
        }
        ser.append_pair("sort", self.sort.as_str());
        ser.append_pair("page", &page.to_string());

        ser.finish()
    }
}

fn is_checked(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// A fresh paginator over `catalog`, with `query.page` pages revealed
/// (or every page, if fewer exist).
pub fn open_feed(
    catalog: &Catalog,
    query: &FeedQuery,
    page_size: usize,
) -> Result<Paginator, ServerError> {
    let mut pager = Paginator::new(page_size)?;
    pager.reset(catalog.listings(), &query.criteria, query.sort);

    while pager.page() < query.page && pager.load_more() {}

    tracing::debug!(
        sort = %query.sort,
        requested = query.page,
        revealed = pager.page(),
        total = pager.total(),
        "feed opened"
    );

    Ok(pager)
}
