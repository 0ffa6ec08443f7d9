//! `custbook` server entry point.
//!
//! Parses configuration, initializes logging, opens the database once and
//! serves the REST API until Ctrl+C / SIGTERM.

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::Cli;
use custbook_api::AppState;
use custbook_core::Store;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    custbook_core::init_logging(cli.log_level(), cli.log_dir.as_deref())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    let store = Store::open(&cli.db_path, &cli.db_options()).with_context(|| {
        format!("failed to open database `{}`", cli.db_path.display())
    })?;
    info!(
        "event=store_ready module=cli status=ok path={} version={}",
        cli.db_path.display(),
        custbook_core::core_version()
    );

    let state = AppState::try_new(store).context("database schema is not usable")?;
    let config = cli.server_config();
    custbook_api::serve(&config, state, shutdown_signal())
        .await
        .with_context(|| format!("server on {} failed", config.socket_addr()))?;

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("event=signal_install module=cli status=error signal=ctrl_c error={err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(
                    "event=signal_install module=cli status=error signal=sigterm error={err}"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("event=shutdown_requested module=cli status=ok");
}
