use crate::domain::price::format_rupees;
use crate::domain::{Listing, ListingDetails};
use crate::templates::components::badge;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" id=(format!("listing-{}", listing.id)) {
            @match &listing.details {
                ListingDetails::Product(product) => {
                    h3 { (product.title) }
                    p class="text-sm text-gray-500" { (product.producer) " · " (listing.location) }
                    p class="price" {
                        strong { (price_text(listing)) }
                        @if listing.price.is_some() {
                            " / " (product.unit)
                        }
                    }
                }
                ListingDetails::Post(post) => {
                    h3 { (post.author) }
                    p class="text-sm text-gray-500" { (listing.location) " · " (listing.created_at.format("%d %b %Y")) }
                    p { (post.body) }
                    @if listing.price.is_some() {
                        p class="price" { strong { (price_text(listing)) } }
                    }
                    p class="text-xs text-gray-500" {
                        (listing.popularity) " likes · " (post.comments) " comments"
                    }
                }
            }

            div class="flex gap-2" {
                (badge(listing.category.as_str()))
                @if listing.organic { (badge("Organic")) }
                @if listing.producer_verified { (badge("Verified")) }
                @if listing.featured { (badge("Featured")) }
                @if !listing.in_stock { span class="text-xs text-red-600" { "Out of stock" } }
            }

            p class="text-xs" { "Rated " (format!("{:.1}", listing.rating)) " / 5" }
        }
    }
}

/// The numeric price when known, otherwise whatever the label says.
fn price_text(listing: &Listing) -> String {
    match listing.price {
        Some(price) => format_rupees(price),
        None if listing.price_label.is_empty() => "Price on request".to_string(),
        None => listing.price_label.clone(),
    }
}
