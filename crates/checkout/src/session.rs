//! One shopper's session: live state plus the journal that produced it.

use common::SessionId;
use domain::{
    Action, CartAction, CartState, Catalog, ProductId, Reducer, SessionState, TransactionLog,
};

/// Owns a [`SessionState`] and every action ever dispatched to it.
///
/// All mutation goes through [`Session::dispatch`], so replaying the journal
/// from an empty state always reproduces the live state.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    state: SessionState,
    journal: Vec<CartAction>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session with an empty cart and log.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            state: SessionState::default(),
            journal: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn cart(&self) -> &CartState {
        &self.state.cart
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.state.transactions
    }

    /// Every action dispatched so far, oldest first.
    pub fn journal(&self) -> &[CartAction] {
        &self.journal
    }

    /// Applies an action to the live state and records it.
    pub fn dispatch(&mut self, action: CartAction) {
        let action_type = action.action_type();
        metrics::counter!("cart_actions_total", "action" => action_type).increment(1);

        self.journal.push(action.clone());
        self.state.apply(action);

        tracing::debug!(
            session_id = %self.id,
            action = action_type,
            lines = self.state.cart.len(),
            items = self.state.cart.item_count(),
            "action applied"
        );
    }

    /// Looks a product up in the catalog and adds one unit of it.
    pub fn add_product<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        product_id: &ProductId,
    ) -> Result<(), domain::DomainError> {
        let product = catalog.product(product_id)?.clone();
        self.dispatch(CartAction::add_item(product));
        Ok(())
    }

    /// Rebuilds the state from the journal alone.
    pub fn replay(&self) -> SessionState {
        SessionState::replay(self.journal.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{DomainError, StaticCatalog};

    #[test]
    fn test_dispatch_records_every_action() {
        let mut session = Session::new();
        let catalog = StaticCatalog::campus();

        session.add_product(&catalog, &ProductId::new("101")).unwrap();
        session.add_product(&catalog, &ProductId::new("101")).unwrap();
        session.dispatch(CartAction::set_quantity("101", 5));
        session.dispatch(CartAction::remove_item("999"));

        assert_eq!(session.journal().len(), 4);
        assert_eq!(
            session.cart().get(&ProductId::new("101")).map(|l| l.quantity()),
            Some(5)
        );
    }

    #[test]
    fn test_replay_matches_live_state() {
        let mut session = Session::new();
        let catalog = StaticCatalog::campus();

        for id in ["101", "201", "101", "302"] {
            session.add_product(&catalog, &ProductId::new(id)).unwrap();
        }
        session.dispatch(CartAction::set_quantity("201", 0));
        session.dispatch(CartAction::ClearCart);
        session.add_product(&catalog, &ProductId::new("404")).unwrap();

        assert_eq!(&session.replay(), session.state());
    }

    #[test]
    fn test_add_unknown_product_is_not_journaled() {
        let mut session = Session::new();
        let catalog = StaticCatalog::campus();

        let err = session
            .add_product(&catalog, &ProductId::new("999"))
            .unwrap_err();

        assert!(matches!(err, DomainError::ProductNotFound { .. }));
        assert!(session.journal().is_empty());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new().id(), Session::new().id());
    }
}
