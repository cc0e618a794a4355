//! End-to-end checkout scenarios against the campus catalog.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use checkout::{
    CheckoutError, CheckoutOrchestrator, CheckoutState, ScanOutcome, ScanSource, ScriptedScanner,
    Session,
};
use domain::{
    CartAction, Identity, IdentityPolicy, IdentityRejected, IdentityResolver, IdentityValidator,
    InMemoryDirectory, Money, ProductId, StaticCatalog,
};

/// Wraps the real validator and counts how often it is consulted.
#[derive(Clone)]
struct CountingResolver {
    inner: Arc<IdentityValidator<InMemoryDirectory>>,
    calls: Arc<AtomicUsize>,
}

impl CountingResolver {
    fn new() -> Self {
        Self {
            inner: Arc::new(IdentityValidator::new(
                IdentityPolicy::default(),
                InMemoryDirectory::campus(),
            )),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdentityResolver for CountingResolver {
    fn resolve(&self, raw: &str) -> Result<Identity, IdentityRejected> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(raw)
    }
}

fn setup() -> (
    CheckoutOrchestrator<CountingResolver, StaticCatalog>,
    CountingResolver,
    Session,
) {
    let resolver = CountingResolver::new();
    let orchestrator = CheckoutOrchestrator::new(resolver.clone(), StaticCatalog::campus());
    (orchestrator, resolver, Session::new())
}

fn add(session: &mut Session, product_id: &str) {
    session
        .add_product(&StaticCatalog::campus(), &ProductId::new(product_id))
        .unwrap();
}

#[tokio::test]
async fn test_empty_cart_never_consults_resolver_or_scanner() {
    let (mut orchestrator, resolver, mut session) = setup();
    let scanner =
        ScriptedScanner::new(ScanSource::Camera).with_outcome(ScanOutcome::scanned("99220040182"));

    let err = orchestrator.pay(&mut session, &scanner).await.unwrap_err();

    assert!(matches!(err, CheckoutError::CartEmpty));
    assert_eq!(orchestrator.state(), CheckoutState::CartEmpty);
    assert_eq!(resolver.calls(), 0);
    assert_eq!(scanner.scan_count(), 0);
    assert!(session.transactions().is_empty());

    // A direct scan submission is refused the same way.
    orchestrator.begin().unwrap();
    let err = orchestrator
        .submit_scan(&mut session, "99220040182")
        .unwrap_err();
    assert!(matches!(err, CheckoutError::CartEmpty));
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_full_checkout_settles_cart() {
    let (mut orchestrator, resolver, mut session) = setup();
    add(&mut session, "101");
    add(&mut session, "101");
    add(&mut session, "201");
    let scanner =
        ScriptedScanner::new(ScanSource::Nfc).with_outcome(ScanOutcome::scanned("99220040183"));

    let settlement = orchestrator.pay(&mut session, &scanner).await.unwrap();

    let transaction = &settlement.transaction;
    assert_eq!(transaction.total(), Money::from_cents(800));
    assert_eq!(transaction.total().to_string(), "₹8.00");
    assert_eq!(transaction.customer_id(), "99220040183");
    assert_eq!(transaction.customer_name(), "Priya Patel");
    assert_eq!(transaction.vendor(), "Bombay Chaatwala, Lee Corner");
    assert_eq!(transaction.lines().len(), 2);
    assert_eq!(transaction.item_count(), 3);

    assert_eq!(session.transactions().len(), 1);
    assert_eq!(session.transactions().latest(), Some(transaction));
    assert!(session.cart().is_empty());
    assert_eq!(orchestrator.state(), CheckoutState::Settled);
    assert_eq!(resolver.calls(), 1);
    assert_eq!(&session.replay(), session.state());
}

#[tokio::test]
async fn test_rejected_scan_then_valid_scan() {
    let (mut orchestrator, resolver, mut session) = setup();
    add(&mut session, "302");
    let scanner = ScriptedScanner::new(ScanSource::Camera)
        .with_outcome(ScanOutcome::scanned("99220abc123"))
        .with_outcome(ScanOutcome::scanned("99220040182"));

    let err = orchestrator.pay(&mut session, &scanner).await.unwrap_err();
    match &err {
        CheckoutError::IdentityRejected(rejected) => {
            assert!(rejected.is_bad_format());
            assert_eq!(rejected.raw(), "99220abc123");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
    assert_eq!(orchestrator.state(), CheckoutState::AwaitingIdentity);
    assert_eq!(session.cart().len(), 1);
    assert!(session.transactions().is_empty());

    let settlement = orchestrator.pay(&mut session, &scanner).await.unwrap();
    assert_eq!(settlement.identity.name, "Rohan Sharma");
    assert_eq!(settlement.transaction.vendor(), "Samosa Spot");
    assert_eq!(resolver.calls(), 2);
}

#[tokio::test]
async fn test_synthesized_identity_settles() {
    let (mut orchestrator, _, mut session) = setup();
    add(&mut session, "404");

    orchestrator.begin().unwrap();
    let settlement = orchestrator
        .submit_scan(&mut session, "99220099999")
        .unwrap();

    assert_eq!(settlement.identity.name, "Student 99999");
    assert_eq!(settlement.transaction.customer_name(), "Student 99999");
}

#[tokio::test]
async fn test_cancel_during_scan_leaves_session_untouched() {
    let (mut orchestrator, resolver, mut session) = setup();
    add(&mut session, "101");
    let before = session.state().clone();
    let scanner = ScriptedScanner::new(ScanSource::Camera);
    let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel::<()>();
    cancel_tx.send(()).unwrap();

    let err = orchestrator
        .pay_until(&mut session, &scanner, async {
            let _ = cancel_rx.await;
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Cancelled));
    assert_eq!(orchestrator.state(), CheckoutState::Idle);
    assert_eq!(session.state(), &before);
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_scanner_cancelled_outcome_returns_to_idle() {
    let (mut orchestrator, _, mut session) = setup();
    add(&mut session, "202");
    let scanner = ScriptedScanner::new(ScanSource::Nfc).with_outcome(ScanOutcome::Cancelled);

    let err = orchestrator.pay(&mut session, &scanner).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Cancelled));
    assert_eq!(orchestrator.state(), CheckoutState::Idle);
    assert_eq!(session.cart().len(), 1);
}

#[tokio::test]
async fn test_log_is_newest_first_across_checkouts() {
    let (mut orchestrator, _, mut session) = setup();
    let scanner = ScriptedScanner::new(ScanSource::Camera)
        .with_outcome(ScanOutcome::scanned("99220040182"))
        .with_outcome(ScanOutcome::scanned("99220040184"));

    add(&mut session, "101");
    let first = orchestrator.pay(&mut session, &scanner).await.unwrap();
    add(&mut session, "203");
    let second = orchestrator.pay(&mut session, &scanner).await.unwrap();

    let newest_first: Vec<_> = session.transactions().list().map(|t| t.id()).collect();
    assert_eq!(
        newest_first,
        [second.transaction.id(), first.transaction.id()]
    );
    assert_eq!(
        session.transactions().get(first.transaction.id()),
        Some(&first.transaction)
    );
}

#[tokio::test]
async fn test_quantity_clamped_to_stock_before_checkout() {
    let (mut orchestrator, _, mut session) = setup();
    add(&mut session, "303");
    session.dispatch(CartAction::set_quantity("303", 1_000));
    let scanner =
        ScriptedScanner::new(ScanSource::Camera).with_outcome(ScanOutcome::scanned("99220040182"));

    let settlement = orchestrator.pay(&mut session, &scanner).await.unwrap();

    // Samosa Spot's lassi: 30 in stock at 4.00.
    assert_eq!(settlement.transaction.item_count(), 30);
    assert_eq!(settlement.transaction.total(), Money::from_cents(12_000));
}
