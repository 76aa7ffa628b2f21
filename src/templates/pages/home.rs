// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub struct HomeVm {
    pub post_count: usize,
    pub product_count: usize,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        None,
        html! {
            main class="container" {
                h1 { "Fresh from Sri Lankan farms" }
                p class="lead" {
                    "HelaTrade connects producers with retail stores across the island."
                }

                (card("Producer feed", html! {
                    p { (vm.post_count) " posts from growers, estates and fisheries." }
                    a href="/posts" class="btn" { "Browse the feed" }
                }))

                (card("Products", html! {
                    p { (vm.product_count) " products ready to order." }
                    a href="/products" class="btn" { "Browse products" }
                }))
            }
        },
    )
}
