//! Storefront shell entry point.

use storefront::{AppError, Config, LineScanner, Storefront};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Completes when the shopper presses Ctrl-C.
async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env();

    // 1. Initialize tracing (stderr keeps the shell output clean)
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. Serve Prometheus metrics if an address is configured
    if let Some(addr) = config.metrics_addr {
        match metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
        {
            Ok(()) => tracing::info!(%addr, "serving Prometheus metrics"),
            Err(e) => tracing::warn!(error = %e, "failed to install Prometheus exporter"),
        }
    }

    // 3. Open the store
    let mut store = Storefront::new(&config);
    let input = LineScanner::new(BufReader::new(tokio::io::stdin()));
    tracing::info!(session_id = %store.session().id(), "session started");
    println!("Campus storefront. Type 'help' for commands.");

    // 4. Read commands until quit, end of input or Ctrl-C
    storefront::shell::run(&mut store, &input, &mut std::io::stdout(), interrupt).await
}
