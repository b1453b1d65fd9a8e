use crate::cli::Args;
use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(origin) => Some(origin),
            Err(err) => {
                tracing::warn!(%origin, "Ignoring allowed origin: {err}.");
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            ORIGIN,
            REFERER,
            USER_AGENT,
            HeaderName::from_static("passcode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}
