//! Browser entry point.

use std::process::ExitCode;

use browser::Config;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT");
        }
        () = terminate => {
            tracing::info!("received SIGTERM");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    // Logs go to stderr; stdout carries the rendered directory.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = match browser::load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "failed to load catalog");
            return ExitCode::FAILURE;
        }
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    match browser::run_session(&catalog, &config, input, &mut stdout, shutdown_signal()).await {
        Ok(()) => {
            tracing::info!("session ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "session failed");
            ExitCode::FAILURE
        }
    }
}
