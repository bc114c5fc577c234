//! Five Hundred tournament score server.
//!
//! Loads the roster, seats round one and serves the tournament state over
//! HTTP until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Error};
use fh_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging, metrics,
};
use five_hundred::{TournamentManager, TournamentState, load_players};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run a Five Hundred tournament score server

USAGE:
  fh_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:5000]
  --players    PATH        Roster file, one name per line  [default: env PLAYERS_FILE or players.txt]
  --tables     N|NAMES     Table count or comma-separated names  [default: env TOURNAMENT_TABLES or T1,T2,T3]
  --rounds     N           Number of rounds to play  [default: env TOTAL_ROUNDS or 3]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:5000)
  PLAYERS_FILE             Roster file path
  TOURNAMENT_TABLES        Table count or names
  TOTAL_ROUNDS             Number of rounds to play
  METRICS_BIND             Prometheus exporter address (disabled when unset)
  RUST_LOG                 Log filter (default: info)
";

struct Args {
    bind: Option<SocketAddr>,
    players: Option<PathBuf>,
    tables: Option<String>,
    rounds: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        players: pargs.opt_value_from_str("--players")?,
        tables: pargs.opt_value_from_str("--tables")?,
        rounds: pargs.opt_value_from_str("--rounds")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.players, args.tables, args.rounds)?;
    config.validate()?;

    let players = load_players(&config.players_file).await?;
    info!("Players: {:?}", players);
    info!("Tables: {:?}", config.tables);

    let state = TournamentState::new(config.total_rounds, players, config.tables.clone())
        .context("Failed to seat the first round")?;
    let app_state = AppState {
        tournament: TournamentManager::new(state),
    };

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        metrics::current_round(1);
        info!("Metrics available at http://{}/metrics", metrics_bind);
    }

    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
