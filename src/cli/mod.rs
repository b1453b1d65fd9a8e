use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::filter::Directive;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// NDJSON file with one location record per line.
    #[arg(long)]
    #[arg(default_value = "locations.example.ndjson")]
    pub locations: PathBuf,
    #[arg(long)]
    #[arg(default_value_t = crate::game::consts::SESSION_TIME_BUDGET_SECS)]
    pub session_duration_secs: u64,
    /// Games that are not being played are dropped after this long without activity.
    #[arg(long)]
    #[arg(default_value_t = crate::game::consts::IDLE_GAME_SECS)]
    pub idle_game_secs: u64,
    /// Origins allowed to call the API from a browser. Can be repeated.
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// Used when `RUST_LOG` isn't set.
    #[arg(long)]
    #[arg(default_value = "trinigeo_server=info")]
    pub log_directive: Directive,
}
