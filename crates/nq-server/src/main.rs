use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use nq_config::NqConfig;
use nq_db::NqDb;
use nq_db::service::QueryService;
use nq_server::cli::Cli;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV_VAR: &str = "NEUROQUERY_LOG";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("neuroquery error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = NqConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply(&mut config);

    let target = config
        .database
        .target()
        .context("no database configured (set DB_URL or NEUROQUERY_DATABASE__URL)")?;
    let db = NqDb::open(&target)
        .await
        .context("failed to open the study corpus")?;
    tracing::info!(dialect = db.dialect().as_str(), "corpus store ready");

    let app = nq_server::router(Arc::new(QueryService::new(db)));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
