use crate::catalog::{Catalog, StaticSource};
use crate::db::connection::{init_db, Database};
use crate::router::App;
use astra::Response;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// A fresh database file in the temp dir, with the production schema applied.
pub fn init_test_db(name: &str) -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("helatrade_{name}_{nanos}.sqlite"));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// The app over the bundled listings, with the default page sizes.
pub fn test_app() -> App {
    App {
        catalog: Catalog::load(&StaticSource).expect("seed catalog should load"),
        post_page_size: 3,
        product_page_size: 12,
    }
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
