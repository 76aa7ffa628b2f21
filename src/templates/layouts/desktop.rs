use crate::domain::ListingKind;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, active: Option<ListingKind>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | HelaTrade" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="brand" { "HelaTrade" }
                  nav {
                      ul {
                          li {
                              a href="/posts" class=[nav_class(active, ListingKind::Post)] { "Feed" }
                          }
                          li {
                              a href="/products" class=[nav_class(active, ListingKind::Product)] { "Products" }
                          }
                      }
                  }
              }
                (content)
            }
        }
    }
}

fn nav_class(active: Option<ListingKind>, link: ListingKind) -> Option<&'static str> {
    (active == Some(link)).then_some("active")
}
