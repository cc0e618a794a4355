//! Checkout orchestrator for the scan-to-pay flow.

use std::future::Future;
use std::time::Instant;

use chrono::Utc;
use common::TransactionId;
use domain::{
    CartAction, CartState, Catalog, Identity, IdentityRejected, IdentityResolver, Transaction,
};
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};
use crate::scanner::{ScanOutcome, Scanner};
use crate::session::Session;
use crate::state::{CheckoutState, RejectionKind};

/// Vendor label used when no cart line maps to a known vendor.
pub const FALLBACK_VENDOR_LABEL: &str = "Campus Store";

/// The result of a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The transaction appended to the session's log.
    pub transaction: Transaction,
    /// The student who paid.
    pub identity: Identity,
}

/// Drives payment attempts against a session.
///
/// One attempt moves through
/// `AwaitingIdentity → Verifying → Settled`, or back to `AwaitingIdentity`
/// on a rejected or failed scan. Settlement records the transaction before it
/// clears the cart, so an interrupted settlement never loses the purchase.
pub struct CheckoutOrchestrator<R, C>
where
    R: IdentityResolver,
    C: Catalog,
{
    resolver: R,
    catalog: C,
    state: CheckoutState,
    transitions: Vec<CheckoutState>,
}

impl<R, C> CheckoutOrchestrator<R, C>
where
    R: IdentityResolver,
    C: Catalog,
{
    /// Creates an orchestrator in the Idle state.
    pub fn new(resolver: R, catalog: C) -> Self {
        Self {
            resolver,
            catalog,
            state: CheckoutState::Idle,
            transitions: Vec::new(),
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Every state entered so far, oldest first.
    pub fn transitions(&self) -> &[CheckoutState] {
        &self.transitions
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Starts a payment attempt.
    ///
    /// Calling it while already awaiting an identity keeps the current attempt.
    pub fn begin(&mut self) -> Result<()> {
        if self.state == CheckoutState::AwaitingIdentity {
            return Ok(());
        }
        if !self.state.can_begin() {
            return Err(CheckoutError::InvalidState {
                expected: "Idle, Settled or CartEmpty",
                actual: self.state,
            });
        }

        metrics::counter!("checkout_attempts_total").increment(1);
        self.transition(CheckoutState::AwaitingIdentity);
        Ok(())
    }

    /// Abandons the current attempt. Cart and log are not touched.
    pub fn cancel(&mut self) {
        if self.state.can_cancel() {
            tracing::info!("checkout cancelled");
            self.transition(CheckoutState::Idle);
        }
    }

    /// Begins an attempt and refuses it up front if the cart is empty.
    ///
    /// The scanner is never started for an empty cart.
    pub fn prepare(&mut self, session: &Session) -> Result<()> {
        self.begin()?;
        if session.cart().is_empty() {
            return Err(self.refuse_empty_cart());
        }
        Ok(())
    }

    /// Pays for the session's cart with one scan from `scanner`.
    pub async fn pay<S>(&mut self, session: &mut Session, scanner: &S) -> Result<Settlement>
    where
        S: Scanner + ?Sized,
    {
        self.pay_until(session, scanner, std::future::pending()).await
    }

    /// Like [`pay`](Self::pay), abandoning the scan if `cancel` completes first.
    #[tracing::instrument(
        skip(self, session, scanner, cancel),
        fields(session_id = %session.id(), source = %scanner.source())
    )]
    pub async fn pay_until<S, F>(
        &mut self,
        session: &mut Session,
        scanner: &S,
        cancel: F,
    ) -> Result<Settlement>
    where
        S: Scanner + ?Sized,
        F: Future<Output = ()>,
    {
        let started = Instant::now();
        self.prepare(session)?;

        tracing::info!(
            lines = session.cart().len(),
            subtotal = %session.cart().subtotal(),
            "waiting for scan"
        );
        let outcome = tokio::select! {
            outcome = scanner.scan() => outcome,
            () = cancel => ScanOutcome::Cancelled,
        };

        let result = self.handle_outcome(session, outcome);
        metrics::histogram!("checkout_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        result
    }

    /// Acts on one scanner outcome while awaiting an identity.
    pub fn handle_outcome(
        &mut self,
        session: &mut Session,
        outcome: ScanOutcome,
    ) -> Result<Settlement> {
        match outcome {
            ScanOutcome::Scanned(raw) => self.submit_scan(session, &raw),
            ScanOutcome::Cancelled => {
                self.cancel();
                Err(self.fail(CheckoutError::Cancelled))
            }
            ScanOutcome::Unavailable(reason) => {
                tracing::warn!(%reason, "scanner unavailable");
                Err(self.fail(CheckoutError::ScanUnavailable(reason)))
            }
            ScanOutcome::Failed(cause) => {
                tracing::warn!(%cause, "scan failed");
                Err(self.fail(CheckoutError::ScanFailed(cause)))
            }
        }
    }

    /// Verifies a raw scanned id and, if it resolves, settles the cart.
    #[tracing::instrument(skip(self, session), fields(session_id = %session.id()))]
    pub fn submit_scan(&mut self, session: &mut Session, raw: &str) -> Result<Settlement> {
        if !self.state.can_accept_scan() {
            return Err(CheckoutError::InvalidState {
                expected: CheckoutState::AwaitingIdentity.as_str(),
                actual: self.state,
            });
        }
        if session.cart().is_empty() {
            return Err(self.refuse_empty_cart());
        }

        self.transition(CheckoutState::Verifying);
        match self.resolver.resolve(raw) {
            Ok(identity) => self.settle(session, identity),
            Err(rejected) => Err(self.reject(rejected)),
        }
    }

    fn settle(&mut self, session: &mut Session, identity: Identity) -> Result<Settlement> {
        let vendor = vendor_label(&self.catalog, session.cart());
        let transaction = match Transaction::from_cart(
            TransactionId::new(),
            vendor,
            Utc::now(),
            &identity,
            session.cart(),
        ) {
            Ok(transaction) => transaction,
            Err(e) => {
                self.transition(CheckoutState::AwaitingIdentity);
                return Err(self.fail(e.into()));
            }
        };

        session.dispatch(CartAction::RecordTransaction(transaction.clone()));
        session.dispatch(CartAction::ClearCart);
        self.transition(CheckoutState::Settled);

        metrics::counter!("checkout_settled_total").increment(1);
        tracing::info!(
            transaction_id = %transaction.id(),
            customer_id = %identity.id,
            vendor = transaction.vendor(),
            total = %transaction.total(),
            "checkout settled"
        );

        Ok(Settlement {
            transaction,
            identity,
        })
    }

    fn reject(&mut self, rejected: IdentityRejected) -> CheckoutError {
        let kind = if rejected.is_bad_format() {
            RejectionKind::BadFormat
        } else {
            RejectionKind::Unknown
        };
        tracing::warn!(raw = rejected.raw(), kind = kind.as_str(), "identity rejected");

        self.transition(CheckoutState::Rejected(kind));
        self.transition(CheckoutState::AwaitingIdentity);
        self.fail(rejected.into())
    }

    fn refuse_empty_cart(&mut self) -> CheckoutError {
        tracing::info!("checkout refused, cart is empty");
        self.transition(CheckoutState::CartEmpty);
        self.fail(CheckoutError::CartEmpty)
    }

    /// Counts identity rejections apart from attempts that ended for other reasons.
    fn fail(&self, error: CheckoutError) -> CheckoutError {
        let reason = error.kind();
        if matches!(error, CheckoutError::IdentityRejected(_)) {
            metrics::counter!("checkout_rejected_total", "reason" => reason).increment(1);
        } else {
            metrics::counter!("checkout_aborted_total", "reason" => reason).increment(1);
        }
        error
    }

    fn transition(&mut self, next: CheckoutState) {
        tracing::debug!(from = %self.state, to = %next, "checkout transition");
        self.state = next;
        self.transitions.push(next);
    }
}

/// Distinct vendor names of the cart's products, in cart order.
fn vendor_label<C: Catalog + ?Sized>(catalog: &C, cart: &CartState) -> String {
    let mut names: Vec<&str> = Vec::new();
    for line in cart.lines() {
        if let Ok(vendor) = catalog.vendor_of(line.product_id()) {
            if !names.contains(&vendor.name.as_str()) {
                names.push(vendor.name.as_str());
            }
        }
    }

    if names.is_empty() {
        FALLBACK_VENDOR_LABEL.to_string()
    } else {
        names.join(", ")
    }
}
