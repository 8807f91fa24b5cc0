//! Static product catalog and gallery image lists.
//!
//! Built once at startup from [`AppConfig`](crate::config::AppConfig) and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ProductId = u32;

/// A product offered in the shop panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
}

/// One image of a gallery category, before it becomes a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: BTreeMap<String, Vec<ImageSpec>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: BTreeMap<String, Vec<ImageSpec>>) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Images for `category`. Unknown categories have no images.
    pub fn images(&self, category: &str) -> &[ImageSpec] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Wireless Headphones".into(),
            price: 79.99,
            category: "electronics".into(),
        },
        Product {
            id: 2,
            name: "Coffee Mug".into(),
            price: 12.99,
            category: "kitchen".into(),
        },
        Product {
            id: 3,
            name: "Notebook".into(),
            price: 5.49,
            category: "stationery".into(),
        },
        Product {
            id: 4,
            name: "Desk Lamp".into(),
            price: 34.50,
            category: "home".into(),
        },
    ]
}

pub fn default_categories() -> BTreeMap<String, Vec<ImageSpec>> {
    let set = |name: &str, titles: &[&str]| -> (String, Vec<ImageSpec>) {
        let images = titles
            .iter()
            .enumerate()
            .map(|(i, title)| ImageSpec {
                title: (*title).to_string(),
                url: format!("https://picsum.photos/seed/{}{}/300/200", name, i + 1),
            })
            .collect();
        (name.to_string(), images)
    };

    BTreeMap::from([
        set(
            "nature",
            &["Mountain Lake", "Forest Path", "Ocean Sunset", "Desert Dunes"],
        ),
        set(
            "city",
            &["Night Skyline", "Old Town", "Harbor Bridge", "Rainy Street"],
        ),
        set(
            "abstract",
            &["Color Waves", "Geometry", "Light Trails", "Ink Drops"],
        ),
    ])
}
