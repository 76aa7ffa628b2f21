// src/domain/listing.rs

use crate::domain::price::parse_price_label;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of produce categories a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Vegetables,
    Fruits,
    Spices,
    Grains,
    Tea,
    Dairy,
    Seafood,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Spices,
        Category::Grains,
        Category::Tea,
        Category::Dairy,
        Category::Seafood,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Spices => "Spices",
            Category::Grains => "Grains",
            Category::Tea => "Tea",
            Category::Dairy => "Dairy",
            Category::Seafood => "Seafood",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Fields only a feed post carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetails {
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub comments: u32,
}

/// Fields only a catalog product carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub producer: String,
    pub title: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListingDetails {
    Post(PostDetails),
    Product(ProductDetails),
}

/// Which feed a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Post,
    Product,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Post => "posts",
            ListingKind::Product => "products",
        }
    }
}

/// A post or product as the feeds see it.
///
/// `price` is the numeric source of truth; `price_label` is display only.
/// Sources that only ship a label get `price` filled in by [`Listing::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub category: Category,
    pub location: String,

    #[serde(default)]
    pub price_label: String,
    #[serde(default)]
    pub price: Option<u64>,

    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub rating: f64,
    pub created_at: NaiveDateTime,

    // Flags
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub producer_verified: bool,

    pub details: ListingDetails,
}

impl Listing {
    pub fn kind(&self) -> ListingKind {
        match self.details {
            ListingDetails::Post(_) => ListingKind::Post,
            ListingDetails::Product(_) => ListingKind::Product,
        }
    }

    /// Product title, or the author for a post.
    pub fn headline(&self) -> &str {
        match &self.details {
            ListingDetails::Post(post) => &post.author,
            ListingDetails::Product(product) => &product.title,
        }
    }

    /// Derives the numeric price from the label when a source left it out.
    /// A label that does not parse leaves `price` as `None`.
    pub fn normalize(mut self) -> Self {
        if self.price.is_none() && !self.price_label.is_empty() {
            self.price = parse_price_label(&self.price_label);
            if self.price.is_none() {
                tracing::debug!(
                    id = self.id,
                    label = %self.price_label,
                    "price label did not parse"
                );
            }
        }
        self
    }
}
