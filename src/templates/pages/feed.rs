use crate::domain::{ListingKind, Paginator};
use crate::feed::FeedQuery;
use crate::templates::{components::filter_form, desktop_layout, listing_card};
use maud::{html, Markup};

fn title(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Post => "Producer feed",
        ListingKind::Product => "Products",
    }
}

/// Full feed page: filters plus every page revealed so far.
pub fn feed_page(kind: ListingKind, query: &FeedQuery, pager: &Paginator) -> Markup {
    desktop_layout(
        title(kind),
        Some(kind),
        html! {
            main class="container" {
                h1 { (title(kind)) }

                (filter_form(kind, query))
                @if !query.criteria.is_unconstrained() {
                    a href=(format!("/{}", kind.as_str())) class="text-sm" { "Clear filters" }
                }

                p class="text-gray-700" {
                    "Found " strong { (pager.total()) } " listings."
                    @if kind == ListingKind::Product && pager.total() > 0 {
                        " "
                        a href=(format!("/products/export?{}", query.to_query_string(1))) { "Download as spreadsheet" }
                    }
                }

                div id="feed" class="listing-grid" {
                    @for listing in pager.displayed() {
                        (listing_card(listing))
                    }
                    (feed_tail(kind, query, pager))
                }
            }
        },
    )
}

/// Only the most recently revealed page, for htmx to swap in place of the
/// previous "load more" trigger.
pub fn feed_partial(kind: ListingKind, query: &FeedQuery, pager: &Paginator) -> Markup {
    // Asked for a page past the end: nothing new to show.
    let revealed = pager.page() == query.page;

    html! {
        @if revealed {
            @for listing in pager.last_page() {
                (listing_card(listing))
            }
        }
        (feed_tail(kind, query, pager))
    }
}

/// What follows the last card: a trigger for the next page, the empty
/// state, or the end-of-results marker.
fn feed_tail(kind: ListingKind, query: &FeedQuery, pager: &Paginator) -> Markup {
    let next = query.to_query_string(pager.page() + 1);

    html! {
        @if pager.has_more() {
            div
                class="load-more"
                hx-get=(format!("/{}/feed?{}", kind.as_str(), next))
                hx-trigger="revealed"
                hx-swap="outerHTML"
            {
                a href=(format!("/{}?{}", kind.as_str(), next)) class="btn" { "Load more" }
            }
        } @else if pager.total() == 0 {
            p class="empty-state" { "No listings match these filters." }
        } @else {
            p class="end-of-feed" { "No more results" }
        }
    }
}
