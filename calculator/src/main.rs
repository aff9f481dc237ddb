use std::time::Duration;

use anyhow::Context;
use calculator::App;
use calculator::config::Config;
use calculator::listener::Listener;
use calculator::logging;
use calculator::server::{RunError, Server};
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config.log_level).context("invalid log level")?;

    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;
    tracing::info!("listening on http://{}", Listener::local_addr(&listener)?);

    let app = App::new().max_body_bytes(config.max_body_bytes);
    let timeout = config.shutdown_timeout();

    let res = Server::new(listener)
        .run_with_graceful_shutdown(app, shutdown_signal(timeout))
        .await;

    match res {
        Ok(()) => {
            tracing::info!("server stopped");
            Ok(())
        }
        // 监听器出错时仍等待已建立的连接处理完成
        Err(RunError::Listener(e, graceful)) => {
            tracing::error!(error = %e, "listener failed");
            graceful.shutdown(Some(timeout)).await;
            Err(e).context("listener failed")
        }
        Err(e) => Err(e.into()),
    }
}

async fn shutdown_signal(timeout: Duration) -> Option<Duration> {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
    Some(timeout)
}
