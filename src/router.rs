use crate::catalog::Catalog;
use crate::config::Config;
use crate::domain::{filter_listings, sort_listings, ListingKind};
use crate::errors::ServerError;
use crate::feed::{open_feed, FeedQuery};
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates;
use crate::templates::pages::home::HomeVm;
use astra::Request;

/// Everything a request handler needs. Shared read-only across workers.
#[derive(Debug, Clone)]
pub struct App {
    pub catalog: Catalog,
    pub post_page_size: usize,
    pub product_page_size: usize,
}

impl App {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            post_page_size: config.post_page_size,
            product_page_size: config.product_page_size,
        }
    }

    fn page_size(&self, kind: ListingKind) -> usize {
        match kind {
            ListingKind::Post => self.post_page_size,
            ListingKind::Product => self.product_page_size,
        }
    }
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    tracing::debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page(&HomeVm {
            post_count: app.catalog.count(ListingKind::Post),
            product_count: app.catalog.count(ListingKind::Product),
        })),

        ("GET", "/posts") => feed(app, ListingKind::Post, query),
        ("GET", "/products") => feed(app, ListingKind::Product, query),

        // htmx "load more" partials
        ("GET", "/posts/feed") => feed_partial(app, ListingKind::Post, query),
        ("GET", "/products/feed") => feed_partial(app, ListingKind::Product, query),

        ("GET", "/products/export") => export_products(app, query),

        _ => Err(ServerError::NotFound),
    }
}

fn feed(app: &App, kind: ListingKind, query: Option<&str>) -> ResultResp {
    let query = FeedQuery::parse(kind, query)?;
    let pager = open_feed(&app.catalog, &query, app.page_size(kind))?;

    html_response(templates::pages::feed_page(kind, &query, &pager))
}

fn feed_partial(app: &App, kind: ListingKind, query: Option<&str>) -> ResultResp {
    let query = FeedQuery::parse(kind, query)?;
    let pager = open_feed(&app.catalog, &query, app.page_size(kind))?;

    html_response(templates::pages::feed_partial(kind, &query, &pager))
}

fn export_products(app: &App, query: Option<&str>) -> ResultResp {
    let query = FeedQuery::parse(ListingKind::Product, query)?;

    let mut listings = filter_listings(app.catalog.listings(), &query.criteria);
    sort_listings(&mut listings, query.sort);

    tracing::info!(rows = listings.len(), sort = %query.sort, "exporting products");

    export_listings_xlsx(&listings, "helatrade-products.xlsx")
}
