//! Domain layer for the campus storefront.
//!
//! This crate provides:
//! - [`Reducer`] and [`Action`] traits for replayable, pure state transitions
//! - the read-only [`Catalog`] of vendors and products
//! - the cart engine ([`SessionState`] driven by [`CartAction`])
//! - student identity resolution ([`IdentityValidator`])
//! - [`Transaction`] records and the append-only [`TransactionLog`]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod identity;
pub mod reducer;
pub mod transaction;
pub mod value_objects;

pub use cart::{CartAction, CartLine, CartState, SessionState, apply};
pub use catalog::{Catalog, Product, StaticCatalog, Vendor};
pub use error::DomainError;
pub use identity::{
    Directory, FormatViolation, Identity, IdentityPolicy, IdentityRejected, IdentityResolver,
    IdentityValidator, InMemoryDirectory,
};
pub use reducer::{Action, Reducer};
pub use transaction::{Transaction, TransactionLine, TransactionLog};
pub use value_objects::{Money, ProductId, VendorId};
