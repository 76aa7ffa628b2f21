// src/domain/sort.rs

use crate::domain::listing::Listing;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The ordering applied after filtering. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Popularity,
    Recent,
    Price,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::Recent,
        SortKey::Price,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Recent => "recent",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Most popular",
            SortKey::Recent => "Newest first",
            SortKey::Price => "Price: low to high",
            SortKey::Rating => "Top rated",
        }
    }

    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::Popularity => b.popularity.cmp(&a.popularity),
            SortKey::Recent => b.created_at.cmp(&a.created_at),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            // Unpriced listings go last.
            SortKey::Price => match (a.price, b.price) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort '{s}'"))
    }
}

/// Stable in-place sort; listings that compare equal keep their order.
pub fn sort_listings(listings: &mut [Arc<Listing>], key: SortKey) {
    listings.sort_by(|a, b| key.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::fixtures::{at, product, shared};
    use crate::domain::listing::Category;

    fn ids(listings: &[Arc<Listing>]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    fn prices(listings: &[Arc<Listing>]) -> Vec<Option<u64>> {
        listings.iter().map(|l| l.price).collect()
    }

    #[test]
    fn price_sorts_ascending() {
        let mut listings = shared(
            [2500, 180, 1800, 850]
                .iter()
                .enumerate()
                .map(|(i, p)| product(i as i64, Category::Spices, Some(*p)))
                .collect(),
        );

        sort_listings(&mut listings, SortKey::Price);

        assert_eq!(
            prices(&listings),
            vec![Some(180), Some(850), Some(1800), Some(2500)]
        );
    }

    #[test]
    fn unpriced_listings_sort_after_priced() {
        let mut listings = shared(vec![
            product(1, Category::Tea, None),
            product(2, Category::Tea, Some(400)),
            product(3, Category::Tea, None),
            product(4, Category::Tea, Some(100)),
        ]);

        sort_listings(&mut listings, SortKey::Price);

        assert_eq!(ids(&listings), vec![4, 2, 1, 3]);
    }

    #[test]
    fn popularity_descends_and_keeps_ties_in_order() {
        let scores = [5, 9, 5, 1, 9];
        let mut listings = shared(
            scores
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let mut l = product(i as i64 + 1, Category::Fruits, Some(100));
                    l.popularity = *s;
                    l
                })
                .collect(),
        );

        sort_listings(&mut listings, SortKey::Popularity);

        assert_eq!(ids(&listings), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn rating_descends() {
        let mut listings = shared(
            [4.2, 4.9, 3.0, 4.9]
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let mut l = product(i as i64 + 1, Category::Fruits, Some(100));
                    l.rating = *r;
                    l
                })
                .collect(),
        );

        sort_listings(&mut listings, SortKey::Rating);

        assert_eq!(ids(&listings), vec![2, 4, 1, 3]);
    }

    #[test]
    fn recent_uses_created_at_newest_first() {
        let mut listings = shared(
            [3, 12, 7]
                .iter()
                .enumerate()
                .map(|(i, day)| {
                    let mut l = product(i as i64 + 1, Category::Grains, Some(100));
                    l.created_at = at(*day);
                    l
                })
                .collect(),
        );

        sort_listings(&mut listings, SortKey::Recent);

        assert_eq!(ids(&listings), vec![2, 3, 1]);
    }

    #[test]
    fn sorting_sorted_input_is_a_no_op() {
        for key in SortKey::ALL {
            let mut listings = shared(
                (0..10)
                    .map(|i| {
                        let mut l = product(i, Category::Spices, Some((i as u64 % 3) * 100));
                        l.popularity = (i % 4) as u32;
                        l.rating = (i % 2) as f64;
                        l.created_at = at((i % 5) as u32 + 1);
                        l
                    })
                    .collect(),
            );

            sort_listings(&mut listings, key);
            let once = ids(&listings);
            sort_listings(&mut listings, key);

            assert_eq!(ids(&listings), once, "resorting by {key} moved ties");
        }
    }

    #[test]
    fn sort_keys_parse() {
        assert_eq!("PRICE".parse::<SortKey>(), Ok(SortKey::Price));
        assert_eq!("recent".parse::<SortKey>(), Ok(SortKey::Recent));
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
