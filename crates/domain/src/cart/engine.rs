//! The session reducer.

use serde::{Deserialize, Serialize};

use crate::reducer::Reducer;
use crate::transaction::TransactionLog;

use super::{CartAction, CartState};

/// State owned by the cart engine: the cart lines and the transaction log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub cart: CartState,
    pub transactions: TransactionLog,
}

impl Reducer for SessionState {
    type Action = CartAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            CartAction::AddItem(product) => self.cart.add_item(product),
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.cart.set_quantity(&product_id, quantity),
            CartAction::RemoveItem { product_id } => self.cart.remove_item(&product_id),
            CartAction::ClearCart => self.cart.clear(),
            CartAction::RecordTransaction(transaction) => {
                // Re-recording an already logged transaction leaves the log as is.
                let _ = self.transactions.append(transaction);
            }
        }
    }
}

/// Returns the state that results from applying `action` to `state`.
pub fn apply(state: &SessionState, action: CartAction) -> SessionState {
    state.clone().reduce(action)
}
