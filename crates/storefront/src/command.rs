//! Parsing of shell input lines into commands.

use std::str::FromStr;

use domain::{ProductId, VendorId};
use thiserror::Error;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all vendors.
    Vendors,
    /// Show one vendor's products.
    Menu(VendorId),
    /// Add one unit of a product to the cart.
    Add(ProductId),
    /// Set a cart line's quantity; zero or less removes it.
    Qty { product_id: ProductId, quantity: i64 },
    /// Remove a cart line.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
    /// Show the cart.
    Cart,
    /// Pay for the cart. Without an id the next input line is the scan.
    Pay(Option<String>),
    /// List past transactions, newest first.
    History,
    /// Show one transaction, or the latest when no id is given.
    Receipt(Option<String>),
    Help,
    Quit,
}

/// Why an input line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no command given")]
    Empty,

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{command}' takes at most {max} argument(s)")]
    TooManyArguments { command: &'static str, max: usize },

    #[error("'{0}' is not a whole number")]
    InvalidQuantity(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "vendors" => {
                expect_args("vendors", &args, 0)?;
                Command::Vendors
            }
            "menu" => {
                let [vendor] = required::<1>("menu", &args, "vendor id")?;
                Command::Menu(VendorId::new(vendor))
            }
            "add" => {
                let [product] = required::<1>("add", &args, "product id")?;
                Command::Add(ProductId::new(product))
            }
            "qty" => {
                let [product, quantity] = required::<2>("qty", &args, "product id and quantity")?;
                let quantity = quantity
                    .parse()
                    .map_err(|_| CommandError::InvalidQuantity(quantity.to_string()))?;
                Command::Qty {
                    product_id: ProductId::new(product),
                    quantity,
                }
            }
            "remove" | "rm" => {
                let [product] = required::<1>("remove", &args, "product id")?;
                Command::Remove(ProductId::new(product))
            }
            "clear" => {
                expect_args("clear", &args, 0)?;
                Command::Clear
            }
            "cart" => {
                expect_args("cart", &args, 0)?;
                Command::Cart
            }
            "pay" => {
                expect_args("pay", &args, 1)?;
                Command::Pay(args.first().map(|raw| raw.to_string()))
            }
            "history" => {
                expect_args("history", &args, 0)?;
                Command::History
            }
            "receipt" => {
                expect_args("receipt", &args, 1)?;
                Command::Receipt(args.first().map(|id| id.to_string()))
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(command)
    }
}

fn expect_args(command: &'static str, args: &[&str], max: usize) -> Result<(), CommandError> {
    if args.len() > max {
        return Err(CommandError::TooManyArguments { command, max });
    }
    Ok(())
}

fn required<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
    argument: &'static str,
) -> Result<[&'a str; N], CommandError> {
    expect_args(command, args, N)?;
    <[&str; N]>::try_from(args).map_err(|_| CommandError::MissingArgument { command, argument })
}
