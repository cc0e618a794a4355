//! Domain error types.

use common::TransactionId;
use thiserror::Error;

use crate::value_objects::{Money, ProductId, VendorId};

/// Errors that can occur during domain operations.
///
/// The cart reducer never produces these; they come from catalog lookups,
/// catalog construction and transaction creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No vendor with the given ID exists in the catalog.
    #[error("Vendor not found: {vendor_id}")]
    VendorNotFound { vendor_id: VendorId },

    /// No product with the given ID exists in the catalog.
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: ProductId },

    /// Two catalog entries share a product ID.
    #[error("Duplicate product ID in catalog: {product_id}")]
    DuplicateProduct { product_id: ProductId },

    /// A catalog entry has a price below zero.
    #[error("Negative price for product {product_id}: {price}")]
    NegativePrice { product_id: ProductId, price: Money },

    /// A transaction was requested for a cart with no lines.
    #[error("Cannot create a transaction from an empty cart")]
    EmptyCart,

    /// The transaction log already holds a transaction with this ID.
    #[error("Transaction already recorded: {0}")]
    DuplicateTransaction(TransactionId),
}
