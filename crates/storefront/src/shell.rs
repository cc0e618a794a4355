//! The interactive command loop.

use std::future::Future;
use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::command::Command;
use crate::error::{AppError, Result};
use crate::scanner::LineScanner;
use crate::{Reply, Storefront};

/// Runs commands from `input` until `quit`, end of input, or an interrupt.
///
/// `interrupt` is called for every wait on the shopper. While a scan is
/// pending its future cancels the scan; at the command prompt it ends the
/// session.
pub async fn run<R, W, I, Fut>(
    store: &mut Storefront,
    input: &LineScanner<R>,
    out: &mut W,
    interrupt: I,
) -> Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
    I: Fn() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        prompt(out, "> ")?;
        let line = tokio::select! {
            biased;
            () = interrupt() => {
                writeln!(out)?;
                tracing::info!("interrupted at the prompt");
                break;
            }
            line = input.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = line
            .parse::<Command>()
            .map_err(AppError::from)
            .and_then(|command| store.execute(command));

        match reply {
            Ok(Reply::Output(text)) => writeln!(out, "{text}")?,
            Ok(Reply::AwaitScan) => {
                prompt(out, "Scan student ID (blank line or Ctrl-C cancels): ")?;
                match store.pay_until(input, interrupt()).await {
                    Ok(text) => writeln!(out, "{text}")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            Ok(Reply::Quit) => break,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    tracing::info!(
        session_id = %store.session().id(),
        transactions = store.session().transactions().len(),
        "session ended"
    );
    Ok(())
}

fn prompt<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}
