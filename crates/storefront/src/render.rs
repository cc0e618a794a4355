//! Plain-text views of the catalog, cart and transaction log.

use std::fmt::Write;

use domain::{CartState, Catalog, Transaction, TransactionLog, Vendor};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub const HELP: &str = "\
Commands:
  vendors                 list vendors
  menu <vendor>           show a vendor's products
  add <product>           add one unit to the cart
  qty <product> <n>       set a quantity (0 removes the item)
  remove <product>        remove an item
  clear                   empty the cart
  cart                    show the cart
  pay [student-id]        pay by scanning a student ID
  history                 list past transactions
  receipt [id]            show a transaction (latest if omitted)
  help                    show this list
  quit                    leave the store";

pub fn vendors<C: Catalog + ?Sized>(catalog: &C) -> String {
    let mut out = String::new();
    for vendor in catalog.vendors() {
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {}",
            vendor.id.as_str(),
            vendor.name,
            vendor.description
        );
    }
    out.trim_end().to_string()
}

pub fn menu(vendor: &Vendor) -> String {
    let mut out = format!("{}\n{}\n", vendor.name, vendor.description);
    for product in &vendor.products {
        let availability = if product.in_stock() {
            format!("{} in stock", product.stock)
        } else {
            "sold out".to_string()
        };
        let _ = writeln!(
            out,
            "{:>6}  {:<20} {:>9}  {}",
            product.id.as_str(),
            product.name,
            product.price.to_string(),
            availability
        );
    }
    out.trim_end().to_string()
}

pub fn cart(cart: &CartState) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut out = String::new();
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "{:>6}  {:<20} {:>3} x {:>8} = {:>9}",
            line.product_id().as_str(),
            line.name(),
            line.quantity(),
            line.unit_price().to_string(),
            line.line_total().to_string()
        );
    }
    let _ = write!(
        out,
        "{} item(s), subtotal {}",
        cart.item_count(),
        cart.subtotal()
    );
    out
}

pub fn history(log: &TransactionLog) -> String {
    if log.is_empty() {
        return "No transactions yet.".to_string();
    }

    let mut out = String::new();
    for transaction in log.list() {
        let _ = writeln!(
            out,
            "{}  {}  {:>9}  {}",
            transaction.id(),
            transaction.date().format(DATE_FORMAT),
            transaction.total().to_string(),
            transaction.vendor()
        );
    }
    out.trim_end().to_string()
}

pub fn receipt(transaction: &Transaction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Receipt {}", transaction.id());
    let _ = writeln!(out, "{}", transaction.vendor());
    let _ = writeln!(out, "{}", transaction.date().format(DATE_FORMAT));
    let _ = writeln!(
        out,
        "Paid by {} ({})",
        transaction.customer_name(),
        transaction.customer_id()
    );
    for line in transaction.lines() {
        let _ = writeln!(
            out,
            "  {:<20} {:>3} x {:>8} = {:>9}",
            line.name,
            line.quantity,
            line.unit_price.to_string(),
            line.line_total().to_string()
        );
    }
    let _ = write!(
        out,
        "Total {} for {} item(s)",
        transaction.total(),
        transaction.item_count()
    );
    out
}
