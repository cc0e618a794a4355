//! In-memory catalog and the campus vendor data.

use std::collections::HashSet;

use crate::error::DomainError;
use crate::value_objects::Money;

use super::{Catalog, Product, Vendor};

/// Catalog backed by a fixed list of vendors.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    vendors: Vec<Vendor>,
}

impl StaticCatalog {
    /// Creates a catalog, rejecting negative prices and product IDs that
    /// appear more than once.
    pub fn new(vendors: Vec<Vendor>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for product in vendors.iter().flat_map(|v| v.products.iter()) {
            if product.price.is_negative() {
                return Err(DomainError::NegativePrice {
                    product_id: product.id.clone(),
                    price: product.price,
                });
            }
            if !seen.insert(product.id.clone()) {
                return Err(DomainError::DuplicateProduct {
                    product_id: product.id.clone(),
                });
            }
        }
        Ok(Self { vendors })
    }

    /// The four campus vendors with their menus.
    pub fn campus() -> Self {
        let vendors = vec![
            Vendor::new(
                "1",
                "Bombay Chaatwala",
                "Authentic Indian street food, bursting with flavor.",
            )
            .with_product(Product::new("101", "Vegetable Samosa", Money::from_cents(225), 60))
            .with_product(Product::new("102", "Pani Puri", Money::from_cents(500), 40))
            .with_product(Product::new("103", "Mango Lassi", Money::from_cents(450), 35))
            .with_product(Product::new("104", "Chai Tea", Money::from_cents(250), 50)),
            Vendor::new(
                "2",
                "Lee Corner",
                "Campus convenience store for quick bites, drinks, and study essentials.",
            )
            .with_product(Product::new("201", "Energy Drink", Money::from_cents(350), 100))
            .with_product(Product::new("202", "Protein Bar", Money::from_cents(275), 80))
            .with_product(Product::new("203", "Bag of Chips", Money::from_cents(150), 120))
            .with_product(Product::new("204", "Instant Noodles", Money::from_cents(200), 90)),
            Vendor::new(
                "3",
                "Samosa Spot",
                "Flavorful samosas and Indian street food.",
            )
            .with_product(Product::new("301", "Vegetable Samosa", Money::from_cents(200), 75))
            .with_product(Product::new("302", "Chicken Samosa", Money::from_cents(250), 50))
            .with_product(Product::new("303", "Mango Lassi", Money::from_cents(400), 30))
            .with_product(Product::new("304", "Chai Tea", Money::from_cents(250), 45)),
            Vendor::new(
                "4",
                "Fruit Shop",
                "Fresh fruits, smoothies, and healthy juices.",
            )
            .with_product(Product::new("401", "Banana", Money::from_cents(50), 150))
            .with_product(Product::new("402", "Orange Juice", Money::from_cents(350), 50))
            .with_product(Product::new("403", "Fruit Salad", Money::from_cents(500), 30))
            .with_product(Product::new("404", "Berry Smoothie", Money::from_cents(600), 25)),
        ];

        Self { vendors }
    }
}

impl Catalog for StaticCatalog {
    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }
}
