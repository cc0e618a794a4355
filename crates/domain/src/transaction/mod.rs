//! Completed purchases and the append-only log that holds them.

mod log;

pub use log::TransactionLog;

use chrono::{DateTime, Utc};
use common::TransactionId;
use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartState};
use crate::error::DomainError;
use crate::identity::Identity;
use crate::value_objects::Money;

/// Snapshot of one cart line at settlement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl TransactionLine {
    /// Returns quantity × unit price.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

impl From<&CartLine> for TransactionLine {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name().to_string(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
        }
    }
}

/// A completed purchase. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    vendor: String,
    date: DateTime<Utc>,
    customer_id: String,
    customer_name: String,
    lines: Vec<TransactionLine>,
    /// Computed once in [`Transaction::from_cart`].
    total: Money,
}

impl Transaction {
    /// Snapshots a non-empty cart into a transaction for `customer`.
    pub fn from_cart(
        id: TransactionId,
        vendor: impl Into<String>,
        date: DateTime<Utc>,
        customer: &Identity,
        cart: &CartState,
    ) -> Result<Self, DomainError> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        let lines: Vec<TransactionLine> = cart.lines().iter().map(TransactionLine::from).collect();
        let total = lines.iter().map(TransactionLine::line_total).sum();

        Ok(Self {
            id,
            vendor: vendor.into(),
            date,
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            lines,
            total,
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Vendor label shown in history.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn lines(&self) -> &[TransactionLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns the total number of units purchased.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
