use maud::{html, Markup};

pub mod error;
pub mod filters;
pub mod listing_card;

pub use error::html_error_response;
pub use filters::filter_form;
pub use listing_card::listing_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn badge(label: &str) -> Markup {
    html! {
        span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-green-100 text-green-800" { (label) }
    }
}
