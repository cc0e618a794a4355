//! Command-line campus storefront.
//!
//! Wires the catalog, the identity validator and the checkout orchestrator to
//! one shopping [`Session`], driven by parsed shell [`Command`]s.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod scanner;
pub mod shell;

use std::future::Future;

use checkout::{CheckoutOrchestrator, CheckoutState, Scanner, Session};
use common::TransactionId;
use domain::{
    CartAction, Catalog, IdentityValidator, InMemoryDirectory, ProductId, StaticCatalog,
    Transaction,
};

pub use command::{Command, CommandError};
pub use config::Config;
pub use error::{AppError, Result};
pub use scanner::LineScanner;

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and read the next command.
    Output(String),
    /// Read the next input as a scanned id, then call [`Storefront::pay_until`].
    AwaitScan,
    /// Leave the shell.
    Quit,
}

/// One shopper at the campus storefront.
pub struct Storefront {
    session: Session,
    orchestrator: CheckoutOrchestrator<IdentityValidator<InMemoryDirectory>, StaticCatalog>,
}

impl Storefront {
    /// Creates a storefront over the campus catalog and student directory.
    pub fn new(config: &Config) -> Self {
        let validator =
            IdentityValidator::new(config.identity_policy(), InMemoryDirectory::campus());
        Self {
            session: Session::new(),
            orchestrator: CheckoutOrchestrator::new(validator, StaticCatalog::campus()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn checkout_state(&self) -> CheckoutState {
        self.orchestrator.state()
    }

    /// Runs one command against the session.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        tracing::debug!(session_id = %self.session.id(), ?command, "executing command");
        let catalog = self.orchestrator.catalog();

        let output = match command {
            Command::Vendors => render::vendors(catalog),
            Command::Menu(vendor_id) => render::menu(catalog.vendor(&vendor_id)?),
            Command::Add(product_id) => {
                let before = self.quantity_of(&product_id);
                self.session.add_product(catalog, &product_id)?;
                let line = self.session.cart().get(&product_id);
                match line {
                    Some(line) if line.quantity() > before => format!(
                        "Added {}. {} item(s), subtotal {}",
                        line.name(),
                        self.session.cart().item_count(),
                        self.session.cart().subtotal()
                    ),
                    Some(line) => format!("Only {} {} available.", line.stock(), line.name()),
                    None => format!("{product_id} is sold out."),
                }
            }
            Command::Qty {
                product_id,
                quantity,
            } => {
                if self.session.cart().get(&product_id).is_none() {
                    format!("{product_id} is not in your cart.")
                } else {
                    self.session
                        .dispatch(CartAction::set_quantity(product_id, quantity));
                    render::cart(self.session.cart())
                }
            }
            Command::Remove(product_id) => {
                if self.session.cart().get(&product_id).is_none() {
                    format!("{product_id} is not in your cart.")
                } else {
                    self.session.dispatch(CartAction::remove_item(product_id));
                    render::cart(self.session.cart())
                }
            }
            Command::Clear => {
                self.session.dispatch(CartAction::ClearCart);
                "Cart cleared.".to_string()
            }
            Command::Cart => render::cart(self.session.cart()),
            Command::Pay(None) => {
                self.orchestrator.prepare(&self.session)?;
                return Ok(Reply::AwaitScan);
            }
            Command::Pay(Some(raw)) => {
                self.orchestrator.prepare(&self.session)?;
                let settlement = self.orchestrator.submit_scan(&mut self.session, &raw)?;
                paid(&settlement.transaction)
            }
            Command::History => render::history(self.session.transactions()),
            Command::Receipt(query) => render::receipt(self.find_receipt(query.as_deref())?),
            Command::Help => render::HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::Output(output))
    }

    /// Completes a payment started by [`Reply::AwaitScan`].
    pub async fn pay_until<S, F>(&mut self, scanner: &S, cancel: F) -> Result<String>
    where
        S: Scanner + ?Sized,
        F: Future<Output = ()>,
    {
        let settlement = self
            .orchestrator
            .pay_until(&mut self.session, scanner, cancel)
            .await?;
        Ok(paid(&settlement.transaction))
    }

    fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.session
            .cart()
            .get(product_id)
            .map_or(0, |line| line.quantity())
    }

    /// Finds a transaction by full id or unique id prefix; the latest when `query` is None.
    fn find_receipt(&self, query: Option<&str>) -> Result<&Transaction> {
        let log = self.session.transactions();
        let Some(query) = query else {
            return log
                .latest()
                .ok_or_else(|| AppError::ReceiptNotFound("latest".to_string()));
        };

        if let Ok(id) = query.parse::<TransactionId>() {
            return log
                .get(id)
                .ok_or_else(|| AppError::ReceiptNotFound(query.to_string()));
        }

        let prefix = query.to_ascii_lowercase();
        let mut matches = log
            .list()
            .filter(|t| t.id().to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(transaction), None) => Ok(transaction),
            (Some(_), Some(_)) => Err(AppError::AmbiguousReceipt(query.to_string())),
            (None, _) => Err(AppError::ReceiptNotFound(query.to_string())),
        }
    }
}

fn paid(transaction: &Transaction) -> String {
    format!("Payment complete.\n{}", render::receipt(transaction))
}
