mod app;
mod audit;
mod config;
mod error;
mod handlers;
mod signer;
mod state;
mod storage;
mod templates;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Stub OpenID Connect provider for exercising a relying party end-to-end
#[derive(Parser, Debug)]
#[command(name = "oidc-stub")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oidc_stub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail closed before serving anything if deployment configuration is
    // incomplete; no partial operation is attempted.
    let config = Config::from_env()?;

    let state = build_state(config).await?;

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Construct application state with the compiled-in backends.
async fn build_state(config: Config) -> Result<AppState> {
    use std::sync::Arc;

    #[cfg(feature = "dynamodb")]
    let nonces = Arc::new(storage::DynamoDbNonceStore::from_env().await);
    #[cfg(feature = "inmemory")]
    let nonces = Arc::new(storage::InMemoryNonceStore::new());

    #[cfg(feature = "sqs")]
    let audit = Arc::new(audit::SqsAuditSink::from_env().await?);
    #[cfg(feature = "memory-audit")]
    let audit = {
        tracing::warn!("in-memory audit sink enabled; events are not delivered anywhere");
        Arc::new(audit::InMemoryAuditSink::new())
    };

    #[cfg(feature = "kms")]
    let signer = Arc::new(signer::KmsSigner::from_env().await);
    #[cfg(feature = "mock-signer")]
    let signer = {
        tracing::warn!("mock signer enabled; id_token signatures are not verifiable");
        Arc::new(signer::MockSigner::new())
    };

    Ok(AppState::new(nonces, audit, signer, config))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
