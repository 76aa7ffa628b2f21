// src/domain/filter.rs

use crate::domain::listing::{Category, Listing, ListingKind};
use crate::domain::price::PriceBucket;
use std::sync::Arc;

/// The active constraints of a feed. Every present field must hold (AND);
/// an absent field, or a flag left `false`, constrains nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub kind: Option<ListingKind>,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub price_bucket: Option<PriceBucket>,

    pub in_stock: bool,
    pub organic: bool,
    pub featured: bool,
    pub producer_verified: bool,
}

impl FilterCriteria {
    pub fn for_kind(kind: ListingKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// True when nothing beyond the feed kind is constrained.
    pub fn is_unconstrained(&self) -> bool {
        *self
            == FilterCriteria {
                kind: self.kind,
                ..FilterCriteria::default()
            }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(kind) = self.kind {
            if listing.kind() != kind {
                return false;
            }
        }

        if let Some(category) = self.category {
            if listing.category != category {
                return false;
            }
        }

        if let Some(needle) = self.location.as_deref().map(str::trim) {
            if !needle.is_empty()
                && !listing
                    .location
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        // No numeric price means the listing can't be placed in any bucket.
        if let Some(bucket) = self.price_bucket {
            match listing.price {
                Some(price) if bucket.contains(price) => {}
                _ => return false,
            }
        }

        (!self.in_stock || listing.in_stock)
            && (!self.organic || listing.organic)
            && (!self.featured || listing.featured)
            && (!self.producer_verified || listing.producer_verified)
    }
}

/// Keeps the listings satisfying `criteria`, in their original order.
pub fn filter_listings(listings: &[Arc<Listing>], criteria: &FilterCriteria) -> Vec<Arc<Listing>> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::fixtures::{post, product, shared};

    fn ids(listings: &[Arc<Listing>]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    fn twelve_listings() -> Vec<Arc<Listing>> {
        let categories = [
            Category::Spices,
            Category::Vegetables,
            Category::Fruits,
            Category::Spices,
            Category::Tea,
            Category::Vegetables,
            Category::Spices,
            Category::Grains,
            Category::Dairy,
            Category::Vegetables,
            Category::Spices,
            Category::Seafood,
        ];

        shared(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| product(i as i64 + 1, *c, Some(100 * (i as u64 + 1))))
                .collect(),
        )
    }

    #[test]
    fn category_filter_returns_only_that_category() {
        let listings = twelve_listings();
        let criteria = FilterCriteria {
            category: Some(Category::Spices),
            ..Default::default()
        };

        let out = filter_listings(&listings, &criteria);

        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|l| l.category == Category::Spices));
        assert_eq!(ids(&out), vec![1, 4, 7, 11]);
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let listings = twelve_listings();
        let out = filter_listings(&listings, &FilterCriteria::default());

        assert_eq!(ids(&out), ids(&listings));
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let mut kandy = product(1, Category::Fruits, Some(300));
        kandy.location = "Kandy, Central Province".to_string();
        let mut galle = product(2, Category::Fruits, Some(300));
        galle.location = "Galle".to_string();
        let listings = shared(vec![kandy, galle]);

        let criteria = FilterCriteria {
            location: Some("  kANDY ".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&filter_listings(&listings, &criteria)), vec![1]);
    }

    #[test]
    fn blank_location_constrains_nothing() {
        let listings = twelve_listings();
        let criteria = FilterCriteria {
            location: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(filter_listings(&listings, &criteria).len(), 12);
    }

    #[test]
    fn price_bucket_excludes_listings_without_price() {
        let listings = shared(vec![
            product(1, Category::Spices, Some(600)),
            product(2, Category::Spices, None),
            product(3, Category::Spices, Some(1000)),
            product(4, Category::Spices, Some(1001)),
        ]);
        let criteria = FilterCriteria {
            price_bucket: Some("500-1000".parse().unwrap()),
            ..Default::default()
        };

        assert_eq!(ids(&filter_listings(&listings, &criteria)), vec![1, 3]);
    }

    #[test]
    fn open_ended_bucket_uses_lower_bound() {
        let listings = shared(vec![
            product(1, Category::Spices, Some(1999)),
            product(2, Category::Spices, Some(2000)),
            product(3, Category::Spices, Some(25_000)),
        ]);
        let criteria = FilterCriteria {
            price_bucket: Some("2000+".parse().unwrap()),
            ..Default::default()
        };

        assert_eq!(ids(&filter_listings(&listings, &criteria)), vec![2, 3]);
    }

    #[test]
    fn flags_require_true_on_listing() {
        let mut organic = product(1, Category::Vegetables, Some(200));
        organic.organic = true;
        let mut verified_organic = product(2, Category::Vegetables, Some(200));
        verified_organic.organic = true;
        verified_organic.producer_verified = true;
        let mut out_of_stock = product(3, Category::Vegetables, Some(200));
        out_of_stock.organic = true;
        out_of_stock.in_stock = false;
        let listings = shared(vec![organic, verified_organic, out_of_stock]);

        let organic_only = FilterCriteria {
            organic: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &organic_only)), vec![1, 2, 3]);

        let strict = FilterCriteria {
            organic: true,
            in_stock: true,
            producer_verified: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &strict)), vec![2]);
    }

    #[test]
    fn kind_separates_posts_from_products() {
        let listings = shared(vec![
            post(1, Category::Tea),
            product(2, Category::Tea, Some(400)),
            post(3, Category::Spices),
        ]);

        let posts = filter_listings(&listings, &FilterCriteria::for_kind(ListingKind::Post));
        let products =
            filter_listings(&listings, &FilterCriteria::for_kind(ListingKind::Product));

        assert_eq!(ids(&posts), vec![1, 3]);
        assert_eq!(ids(&products), vec![2]);
    }

    #[test]
    fn conjunction_equals_sequential_filtering() {
        let mut listings: Vec<Listing> = twelve_listings()
            .iter()
            .map(|l| Listing::clone(l))
            .collect();
        for (i, listing) in listings.iter_mut().enumerate() {
            listing.organic = i % 2 == 0;
            listing.location = if i % 3 == 0 { "Matale" } else { "Jaffna" }.to_string();
        }
        let listings = shared(listings);

        let by_category = FilterCriteria {
            category: Some(Category::Spices),
            ..Default::default()
        };
        let by_flag = FilterCriteria {
            organic: true,
            ..Default::default()
        };
        let by_location = FilterCriteria {
            location: Some("matale".to_string()),
            ..Default::default()
        };
        let by_price = FilterCriteria {
            price_bucket: Some("0-700".parse().unwrap()),
            ..Default::default()
        };

        let pairs = [
            (&by_category, &by_flag),
            (&by_flag, &by_location),
            (&by_location, &by_price),
            (&by_price, &by_category),
        ];

        for (c1, c2) in pairs {
            let combined = FilterCriteria {
                category: c1.category.or(c2.category),
                location: c1.location.clone().or_else(|| c2.location.clone()),
                price_bucket: c1.price_bucket.or(c2.price_bucket),
                organic: c1.organic || c2.organic,
                ..Default::default()
            };

            let at_once = filter_listings(&listings, &combined);
            let sequential = filter_listings(&filter_listings(&listings, c1), c2);

            assert_eq!(ids(&at_once), ids(&sequential));
        }
    }

    #[test]
    fn unconstrained_ignores_kind() {
        assert!(FilterCriteria::for_kind(ListingKind::Post).is_unconstrained());
        assert!(!FilterCriteria {
            organic: true,
            ..Default::default()
        }
        .is_unconstrained());
    }
}
