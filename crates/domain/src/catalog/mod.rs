//! Read-only catalog of vendors and their products.

mod campus;

pub use campus::StaticCatalog;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Money, ProductId, VendorId};

/// A product offered by a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price per unit.
    pub price: Money,
    /// Most units a single cart may hold.
    pub stock: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Returns true if at least one unit can be sold.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A campus vendor and the products it sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub description: String,
    pub products: Vec<Product>,
}

impl Vendor {
    /// Creates a vendor with no products.
    pub fn new(
        id: impl Into<VendorId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
        }
    }

    /// Adds a product to this vendor.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Returns the product with the given ID, if this vendor sells it.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }
}

/// Read-only access to vendors and products.
pub trait Catalog: Send + Sync {
    /// Returns all vendors in display order.
    fn vendors(&self) -> &[Vendor];

    /// Returns a vendor by ID.
    fn vendor(&self, vendor_id: &VendorId) -> Result<&Vendor, DomainError> {
        self.vendors()
            .iter()
            .find(|v| &v.id == vendor_id)
            .ok_or_else(|| DomainError::VendorNotFound {
                vendor_id: vendor_id.clone(),
            })
    }

    /// Returns the vendor selling the given product.
    fn vendor_of(&self, product_id: &ProductId) -> Result<&Vendor, DomainError> {
        self.vendors()
            .iter()
            .find(|v| v.product(product_id).is_some())
            .ok_or_else(|| DomainError::ProductNotFound {
                product_id: product_id.clone(),
            })
    }

    /// Returns a product by ID, searching every vendor.
    fn product(&self, product_id: &ProductId) -> Result<&Product, DomainError> {
        self.vendors()
            .iter()
            .find_map(|v| v.product(product_id))
            .ok_or_else(|| DomainError::ProductNotFound {
                product_id: product_id.clone(),
            })
    }
}
