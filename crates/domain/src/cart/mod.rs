//! Cart engine: cart lines, actions and the session reducer.

mod actions;
mod engine;
mod state;

pub use actions::CartAction;
pub use engine::{SessionState, apply};
pub use state::{CartLine, CartState};
