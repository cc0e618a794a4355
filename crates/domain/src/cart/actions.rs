//! Cart actions.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::reducer::Action;
use crate::transaction::Transaction;
use crate::value_objects::ProductId;

/// Every state transition the cart engine understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CartAction {
    /// Add one unit of a product, bounded by its stock.
    AddItem(Product),

    /// Set a line's quantity; zero or less removes the line.
    SetQuantity { product_id: ProductId, quantity: i64 },

    /// Remove a line.
    RemoveItem { product_id: ProductId },

    /// Remove every line. The transaction log is untouched.
    ClearCart,

    /// Append a completed transaction to the log. The cart is untouched.
    RecordTransaction(Transaction),
}

impl Action for CartAction {
    fn action_type(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "AddItem",
            CartAction::SetQuantity { .. } => "SetQuantity",
            CartAction::RemoveItem { .. } => "RemoveItem",
            CartAction::ClearCart => "ClearCart",
            CartAction::RecordTransaction(_) => "RecordTransaction",
        }
    }
}

impl CartAction {
    /// Creates an AddItem action.
    pub fn add_item(product: Product) -> Self {
        CartAction::AddItem(product)
    }

    /// Creates a SetQuantity action.
    pub fn set_quantity(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        CartAction::SetQuantity {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Creates a RemoveItem action.
    pub fn remove_item(product_id: impl Into<ProductId>) -> Self {
        CartAction::RemoveItem {
            product_id: product_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Money;

    #[test]
    fn test_action_types() {
        let product = Product::new("101", "Vegetable Samosa", Money::from_cents(225), 60);
        assert_eq!(CartAction::add_item(product).action_type(), "AddItem");
        assert_eq!(CartAction::set_quantity("101", 3).action_type(), "SetQuantity");
        assert_eq!(CartAction::remove_item("101").action_type(), "RemoveItem");
        assert_eq!(CartAction::ClearCart.action_type(), "ClearCart");
    }

    #[test]
    fn test_action_serialization_is_tagged() {
        let json = serde_json::to_value(CartAction::set_quantity("101", 2)).unwrap();
        assert_eq!(json["type"], "SetQuantity");
        assert_eq!(json["data"]["product_id"], "101");
        assert_eq!(json["data"]["quantity"], 2);

        let json = serde_json::to_value(CartAction::ClearCart).unwrap();
        assert_eq!(json["type"], "ClearCart");
    }
}
