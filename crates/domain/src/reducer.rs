//! Core reducer and action traits.

use serde::{Serialize, de::DeserializeOwned};

/// Trait for actions fed to a reducer.
///
/// Actions describe a user intent. They are plain data so that a recorded
/// sequence can be replayed or audited later.
pub trait Action: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the action type name.
    ///
    /// Used for logging and metrics labels.
    fn action_type(&self) -> &'static str;
}

/// Trait for state that evolves by applying actions.
///
/// Applying an action must be pure and total:
/// - Given the same state and action, it must always produce the same new state
/// - It must not have side effects
/// - It must not fail (an action that cannot take effect leaves the state unchanged)
pub trait Reducer: Default + Clone + Send + Sync + Sized {
    /// The type of actions this reducer consumes.
    type Action: Action;

    /// Applies an action in place.
    fn apply(&mut self, action: Self::Action);

    /// Applies multiple actions in sequence.
    fn apply_all(&mut self, actions: impl IntoIterator<Item = Self::Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Consumes the state and returns the state after `action`.
    fn reduce(mut self, action: Self::Action) -> Self {
        self.apply(action);
        self
    }

    /// Rebuilds a state from its initial value by replaying `actions`.
    fn replay(actions: impl IntoIterator<Item = Self::Action>) -> Self {
        let mut state = Self::default();
        state.apply_all(actions);
        state
    }
}
