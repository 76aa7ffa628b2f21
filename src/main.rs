use crate::catalog::{Catalog, ListingSource, RemoteSource, StaticSource};
use crate::config::{Config, SourceKind};
use crate::db::{init_db, load_listings, save_listings, Database, SqliteSource};
use crate::errors::ServerError;
use crate::router::{handle, App};
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod feed;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 1. Load the catalog once; every worker shares it.
    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load listings: {e}");
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        warn!("catalog is empty; feeds will show no listings");
    }

    // 2. Start the server
    let app = App::new(catalog, &config);
    info!(addr = %config.addr, workers = config.workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

fn load_catalog(config: &Config) -> Result<Catalog, ServerError> {
    info!(source = config.source.as_str(), "loading catalog");

    let catalog = match config.source {
        SourceKind::Static => Catalog::load(&StaticSource)?,
        SourceKind::Sqlite => {
            let db = Database::new(config.db_path.clone());
            init_db(&db)?;

            // A fresh database starts with the bundled listings.
            if load_listings(&db)?.is_empty() {
                let seeded = save_listings(&db, &StaticSource.fetch()?)?;
                info!(rows = seeded, path = %config.db_path, "seeded empty database");
            }

            Catalog::load(&SqliteSource::new(db))?
        }
        SourceKind::Remote => {
            let url = config
                .source_url
                .clone()
                .ok_or(ServerError::InternalError)?;
            Catalog::load(&RemoteSource::new(url)?)?
        }
    };

    Ok(catalog)
}
