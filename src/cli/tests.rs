use crate::cli::Args;
use crate::game::consts::{IDLE_GAME_SECS, SESSION_TIME_BUDGET_SECS};
use clap::Parser;
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr};
use tracing_subscriber::filter::Directive;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        jwt_signing_key: String::from("testKey"),
        locations: PathBuf::from("locations.example.ndjson"),
        session_duration_secs: SESSION_TIME_BUDGET_SECS,
        idle_game_secs: IDLE_GAME_SECS,
        allowed_origins: vec![String::from("http://localhost:3000")],
        log_directive: Directive::from_str("trinigeo_server=info")
            .expect("Failed to construct fake logging directive."),
    }
}

#[test]
fn test_defaults_are_applied() {
    let args = Args::try_parse_from(["trinigeo-server", "--jwt-signing-key", "secret"])
        .expect("Failed to parse minimal arguments.");

    assert_eq!(args.listen_address.port(), 3030);
    assert_eq!(args.session_duration_secs, 300);
    assert_eq!(args.idle_game_secs, 900);
    assert_eq!(args.locations, PathBuf::from("locations.example.ndjson"));
    assert_eq!(args.allowed_origins.len(), 2);
}

#[test]
fn test_signing_key_is_required() {
    assert!(Args::try_parse_from(["trinigeo-server"]).is_err());
}

#[test]
fn test_allowed_origin_can_be_repeated() {
    let args = Args::try_parse_from([
        "trinigeo-server",
        "--jwt-signing-key",
        "secret",
        "--allowed-origin",
        "https://trinigeo.example",
        "--allowed-origin",
        "https://staging.trinigeo.example",
    ])
    .expect("Failed to parse repeated origins.");

    assert_eq!(
        args.allowed_origins,
        vec![
            String::from("https://trinigeo.example"),
            String::from("https://staging.trinigeo.example"),
        ]
    );
}
