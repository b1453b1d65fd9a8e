use crate::app_context::DefaultAppContext;
use crate::cli::Args;
use crate::{auth, game, geo, health, http::cors, leaderboard};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: DefaultAppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new().route("/passcode/decode", get(auth::handlers::decode_passcode));
    let games_routes = Router::new()
        .route("/", post(game::handlers::create))
        .route(
            "/:game-id",
            get(game::handlers::state).delete(game::handlers::delete),
        )
        .route("/:game-id/start", post(game::handlers::start))
        .route("/:game-id/guess", post(game::handlers::guess))
        .route("/:game-id/confirm", post(game::handlers::confirm))
        .route("/:game-id/skip", post(game::handlers::skip))
        .route("/:game-id/next", post(game::handlers::next))
        .route("/:game-id/exit", post(game::handlers::exit));
    let leaderboard_routes = Router::new().route("/", get(leaderboard::handlers::top));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/games", games_routes)
        .nest("/leaderboard", leaderboard_routes)
        .route("/distance", post(geo::handlers::distance))
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
