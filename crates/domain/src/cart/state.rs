//! Cart lines and the cart they live in.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::value_objects::{Money, ProductId};

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot taken when the line was last incremented.
    product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Stock ceiling the quantity is bounded by.
    pub fn stock(&self) -> u32 {
        self.product.stock
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns quantity × unit price.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// The lines of one session's cart, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

// Query methods
impl CartState {
    /// Returns all lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Returns Σ(quantity × unit price) over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

// Transitions used by the reducer. Each one leaves the cart unchanged when
// it cannot take effect.
impl CartState {
    pub(crate) fn add_item(&mut self, product: Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            let new_quantity = line.quantity.saturating_add(1);
            if new_quantity <= product.stock {
                line.quantity = new_quantity;
                line.product = product;
            }
        } else if product.stock >= 1 {
            self.lines.push(CartLine::new(product));
        }
    }

    pub(crate) fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| &line.product.id == product_id)
        {
            let ceiling = i64::from(line.product.stock);
            line.quantity = u32::try_from(quantity.min(ceiling)).unwrap_or(line.product.stock);
        }
    }

    pub(crate) fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product.id != product_id);
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
