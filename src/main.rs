use anyhow::Context;
use chrono::TimeDelta;
use clap::Parser;
use std::time::Duration;

mod app_context;
mod auth;
mod cli;
mod difficulty;
mod game;
mod geo;
mod health;
mod http;
mod leaderboard;
mod locations;
mod logging;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args);
    auth::init(&args);
    let app_context = app_context::init(&args)?;
    let max_idle = TimeDelta::from_std(Duration::from_secs(args.idle_game_secs))
        .context("Idle game timeout is out of range.")?;
    game::sweeper::spawn(
        app_context.games.clone(),
        max_idle,
        Duration::from_secs(game::consts::GAME_SWEEP_INTERVAL_SECS),
    );
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}.", args.listen_address))?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .context("HTTP server terminated unexpectedly.")?;
    Ok(())
}
