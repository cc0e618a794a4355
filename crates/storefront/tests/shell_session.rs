//! Drives a storefront session the way the shell does.

use std::sync::atomic::{AtomicUsize, Ordering};

use checkout::{CheckoutError, CheckoutState, ScanOutcome, ScanSource, ScriptedScanner};
use domain::Money;
use storefront::{AppError, Command, Config, LineScanner, Reply, Storefront};

fn run(store: &mut Storefront, line: &str) -> Result<Reply, AppError> {
    line.parse::<Command>()
        .map_err(AppError::from)
        .and_then(|command| store.execute(command))
}

fn text(store: &mut Storefront, line: &str) -> String {
    match run(store, line).unwrap() {
        Reply::Output(text) => text,
        other => panic!("expected output for '{line}', got {other:?}"),
    }
}

#[tokio::test]
async fn test_browse_fill_cart_and_pay_from_input() {
    let mut store = Storefront::new(&Config::default());
    let input = LineScanner::new(&b"99220040183\n"[..]);

    assert!(text(&mut store, "menu 1").contains("Pani Puri"));
    text(&mut store, "add 101");
    text(&mut store, "add 101");
    text(&mut store, "add 201");
    let cart = text(&mut store, "cart");
    assert!(cart.ends_with("3 item(s), subtotal ₹8.00"));

    assert_eq!(run(&mut store, "pay").unwrap(), Reply::AwaitScan);
    let receipt = store
        .pay_until(&input, std::future::pending())
        .await
        .unwrap();

    assert!(receipt.starts_with("Payment complete."));
    assert!(receipt.contains("Paid by Priya Patel (99220040183)"));
    assert!(receipt.contains("Total ₹8.00 for 3 item(s)"));
    assert_eq!(text(&mut store, "cart"), "Your cart is empty.");

    let session = store.session();
    assert_eq!(session.transactions().len(), 1);
    assert_eq!(
        session.transactions().latest().map(|t| t.total()),
        Some(Money::from_cents(800))
    );
    assert_eq!(&session.replay(), session.state());
}

#[tokio::test]
async fn test_blank_scan_line_cancels_payment() {
    let mut store = Storefront::new(&Config::default());
    let input = LineScanner::new(&b"\n"[..]);
    text(&mut store, "add 302");

    assert_eq!(run(&mut store, "pay").unwrap(), Reply::AwaitScan);
    let err = store
        .pay_until(&input, std::future::pending())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Checkout(CheckoutError::Cancelled)));
    assert_eq!(store.checkout_state(), CheckoutState::Idle);
    assert!(store.session().transactions().is_empty());
    assert_eq!(store.session().cart().len(), 1);
}

#[tokio::test]
async fn test_interrupt_cancels_pending_scan() {
    let mut store = Storefront::new(&Config::default());
    let scanner = ScriptedScanner::new(ScanSource::Nfc);
    text(&mut store, "add 104");

    run(&mut store, "pay").unwrap();
    let err = store
        .pay_until(&scanner, std::future::ready(()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Checkout(CheckoutError::Cancelled)));
    assert_eq!(store.session().cart().len(), 1);
}

#[tokio::test]
async fn test_rejected_id_can_be_rescanned() {
    let mut store = Storefront::new(&Config::default());
    let scanner = ScriptedScanner::new(ScanSource::Camera)
        .with_outcome(ScanOutcome::scanned("12345"))
        .with_outcome(ScanOutcome::scanned("99220040184"));
    text(&mut store, "add 402");

    run(&mut store, "pay").unwrap();
    let err = store
        .pay_until(&scanner, std::future::pending())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("12345"));
    assert_eq!(store.checkout_state(), CheckoutState::AwaitingIdentity);

    run(&mut store, "pay").unwrap();
    let receipt = store
        .pay_until(&scanner, std::future::pending())
        .await
        .unwrap();
    assert!(receipt.contains("Amit Singh"));
}

#[test]
fn test_strict_directory_rejects_unknown_students() {
    let config = Config {
        synthesize_unknown: false,
        ..Config::default()
    };
    let mut store = Storefront::new(&config);
    text(&mut store, "add 203");

    let err = run(&mut store, "pay 99220099999").unwrap_err();

    assert!(matches!(
        err,
        AppError::Checkout(CheckoutError::IdentityRejected(_))
    ));
    assert_eq!(
        err.to_string(),
        "ID rejected: student ID '99220099999' was not found. Check the card and scan again."
    );
    assert_eq!(store.session().cart().len(), 1);
}

#[test]
fn test_history_is_newest_first() {
    let mut store = Storefront::new(&Config::default());
    text(&mut store, "add 101");
    text(&mut store, "pay 99220040182");
    text(&mut store, "add 203");
    text(&mut store, "pay 99220040183");

    let history = text(&mut store, "history");
    let lines: Vec<&str> = history.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("Lee Corner"));
    assert!(lines[1].ends_with("Bombay Chaatwala"));
}

#[tokio::test]
async fn test_shell_runs_until_quit() {
    let mut store = Storefront::new(&Config::default());
    let input = LineScanner::new(&b"add 101\nadd 201\npay\n99220040182\nquit\nadd 102\n"[..]);
    let mut out = Vec::new();

    storefront::shell::run(&mut store, &input, &mut out, std::future::pending::<()>)
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Payment complete."));
    assert!(out.contains("Paid by Rohan Sharma (99220040182)"));
    assert!(store.session().cart().is_empty());
    assert_eq!(store.session().transactions().len(), 1);
}

#[tokio::test]
async fn test_interrupt_at_prompt_ends_session_after_cancelled_scan() {
    let mut store = Storefront::new(&Config::default());
    let input = LineScanner::new(&b"add 101\npay\n\nadd 102\n"[..]);
    let mut out = Vec::new();

    // Quiet for the first two prompts, then interrupting every wait: the scan
    // for `pay` and every prompt after it.
    let waits = AtomicUsize::new(0);
    let interrupt = || {
        let fire = waits.fetch_add(1, Ordering::SeqCst) >= 2;
        async move {
            if !fire {
                std::future::pending::<()>().await;
            }
        }
    };

    storefront::shell::run(&mut store, &input, &mut out, interrupt)
        .await
        .unwrap();

    let session = store.session();
    assert_eq!(session.cart().len(), 1);
    assert!(session.cart().get(&domain::ProductId::new("102")).is_none());
    assert!(session.transactions().is_empty());
    assert_eq!(store.checkout_state(), CheckoutState::Idle);
}
