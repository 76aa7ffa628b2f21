use crate::domain::{Category, ListingKind, PriceBucket, SortKey};
use crate::feed::FeedQuery;
use maud::{html, Markup};

/// GET form for the feed's filters and sort. Submitting starts the feed over
/// from the first page.
pub fn filter_form(kind: ListingKind, query: &FeedQuery) -> Markup {
    let c = &query.criteria;

    html! {
        form class="filters" method="get" action=(format!("/{}", kind.as_str())) {
            label for="category" { "Category" }
            select name="category" id="category" {
                option value="All" selected[c.category.is_none()] { "All" }
                @for category in Category::ALL {
                    option value=(category.as_str()) selected[c.category == Some(category)] { (category.as_str()) }
                }
            }

            label for="location" { "Location" }
            input
                type="text"
                name="location"
                id="location"
                placeholder="e.g. Kandy"
                value=(c.location.as_deref().unwrap_or(""));

            label for="price" { "Price" }
            select name="price" id="price" {
                option value="all" selected[c.price_bucket.is_none()] { "Any price" }
                @for bucket in PriceBucket::PRESETS {
                    option value=(bucket.to_string()) selected[c.price_bucket == Some(bucket)] { (bucket.label()) }
                }
            }

            fieldset {
                (flag("in_stock", "In stock", c.in_stock))
                (flag("organic", "Organic", c.organic))
                (flag("featured", "Featured", c.featured))
                (flag("verified", "Verified producer", c.producer_verified))
            }

            label for="sort" { "Sort by" }
            select name="sort" id="sort" {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[query.sort == key] { (key.label()) }
                }
            }

            button type="submit" class="btn" { "Apply" }
        }
    }
}

fn flag(name: &str, label: &str, checked: bool) -> Markup {
    html! {
        label {
            input type="checkbox" name=(name) value="1" checked[checked];
            " " (label)
        }
    }
}
