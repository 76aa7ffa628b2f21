use crate::catalog::{ListingSource, SourceError};
use crate::db::connection::Database;
use crate::domain::listing::{PostDetails, ProductDetails};
use crate::domain::{Category, Listing, ListingDetails};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;

/// Insert or update listings by id, in one transaction.
pub fn save_listings(db: &Database, listings: &[Listing]) -> Result<usize, ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for listing in listings {
            let (kind, author, body, comments, producer, title, unit) = match &listing.details {
                ListingDetails::Post(p) => (
                    "post",
                    Some(p.author.as_str()),
                    Some(p.body.as_str()),
                    Some(p.comments),
                    None,
                    None,
                    None,
                ),
                ListingDetails::Product(p) => (
                    "product",
                    None,
                    None,
                    None,
                    Some(p.producer.as_str()),
                    Some(p.title.as_str()),
                    Some(p.unit.as_str()),
                ),
            };

            tx.execute(
                r#"
                INSERT INTO listings (
                    id, kind, category, location,
                    price_label, price,
                    popularity, rating, created_at,
                    in_stock, organic, featured, producer_verified,
                    author, body, comments,
                    producer, title, unit
                ) VALUES (
                    ?1, ?2, ?3, ?4,
                    ?5, ?6,
                    ?7, ?8, ?9,
                    ?10, ?11, ?12, ?13,
                    ?14, ?15, ?16,
                    ?17, ?18, ?19
                )
                ON CONFLICT(id) DO UPDATE SET
                    kind = excluded.kind,
                    category = excluded.category,
                    location = excluded.location,
                    price_label = excluded.price_label,
                    price = excluded.price,
                    popularity = excluded.popularity,
                    rating = excluded.rating,
                    created_at = excluded.created_at,
                    in_stock = excluded.in_stock,
                    organic = excluded.organic,
                    featured = excluded.featured,
                    producer_verified = excluded.producer_verified,
                    author = excluded.author,
                    body = excluded.body,
                    comments = excluded.comments,
                    producer = excluded.producer,
                    title = excluded.title,
                    unit = excluded.unit
                "#,
                params![
                    listing.id,
                    kind,
                    listing.category.as_str(),
                    listing.location,
                    // pricing
                    listing.price_label,
                    listing.price.map(|p| p as i64),
                    // ranking
                    listing.popularity,
                    listing.rating,
                    listing.created_at,
                    // flags
                    listing.in_stock,
                    listing.organic,
                    listing.featured,
                    listing.producer_verified,
                    // post
                    author,
                    body,
                    comments,
                    // product
                    producer,
                    title,
                    unit
                ],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        Ok(listings.len())
    })
}

struct ListingRow {
    id: i64,
    kind: String,
    category: String,
    location: String,
    price_label: String,
    price: Option<i64>,
    popularity: u32,
    rating: f64,
    created_at: NaiveDateTime,
    in_stock: bool,
    organic: bool,
    featured: bool,
    producer_verified: bool,
    author: Option<String>,
    body: Option<String>,
    comments: Option<u32>,
    producer: Option<String>,
    title: Option<String>,
    unit: Option<String>,
}

impl ListingRow {
    fn into_listing(self) -> Result<Listing, String> {
        let category: Category = self.category.parse()?;

        let details = match self.kind.as_str() {
            "post" => ListingDetails::Post(PostDetails {
                author: self.author.unwrap_or_default(),
                body: self.body.unwrap_or_default(),
                comments: self.comments.unwrap_or(0),
            }),
            "product" => ListingDetails::Product(ProductDetails {
                producer: self.producer.unwrap_or_default(),
                title: self.title.unwrap_or_default(),
                unit: self.unit.unwrap_or_default(),
            }),
            other => return Err(format!("listing {} has unknown kind '{other}'", self.id)),
        };

        Ok(Listing {
            id: self.id,
            category,
            location: self.location,
            price_label: self.price_label,
            // Negative prices are treated as missing.
            price: self.price.and_then(|p| u64::try_from(p).ok()),
            popularity: self.popularity,
            rating: self.rating,
            created_at: self.created_at,
            in_stock: self.in_stock,
            organic: self.organic,
            featured: self.featured,
            producer_verified: self.producer_verified,
            details,
        })
    }
}

/// All listings, in insertion (id) order.
pub fn load_listings(db: &Database) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT
                    id,                 -- 0
                    kind,               -- 1
                    category,           -- 2
                    location,           -- 3
                    price_label,        -- 4
                    price,              -- 5
                    popularity,         -- 6
                    rating,             -- 7
                    created_at,         -- 8
                    in_stock,           -- 9
                    organic,            -- 10
                    featured,           -- 11
                    producer_verified,  -- 12
                    author,             -- 13
                    body,               -- 14
                    comments,           -- 15
                    producer,           -- 16
                    title,              -- 17
                    unit                -- 18
                FROM listings
                ORDER BY id
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ListingRow {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                    category: row.get(2)?,
                    location: row.get(3)?,
                    price_label: row.get(4)?,
                    price: row.get(5)?,
                    popularity: row.get(6)?,
                    rating: row.get(7)?,
                    created_at: row.get(8)?,
                    in_stock: row.get(9)?,
                    organic: row.get(10)?,
                    featured: row.get(11)?,
                    producer_verified: row.get(12)?,
                    author: row.get(13)?,
                    body: row.get(14)?,
                    comments: row.get(15)?,
                    producer: row.get(16)?,
                    title: row.get(17)?,
                    unit: row.get(18)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            let row = row.map_err(|e| ServerError::DbError(e.to_string()))?;
            results.push(row.into_listing().map_err(ServerError::DbError)?);
        }

        Ok(results)
    })
}

/// Reads the catalog from the `listings` table.
pub struct SqliteSource {
    db: Database,
}

impl SqliteSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ListingSource for SqliteSource {
    fn name(&self) -> &str {
        self.db.path()
    }

    fn fetch(&self) -> Result<Vec<Listing>, SourceError> {
        load_listings(&self.db).map_err(|e| SourceError::Db(e.to_string()))
    }
}
