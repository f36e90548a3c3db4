pub mod middleware;
pub mod router;

use crate::cli::Args;
use ::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn cors_layer(args: &Args) -> CorsLayer {
    let origins: Vec<HeaderValue> = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring malformed allowed origin `{origin}`.");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            header::USER_AGENT,
            header::REFERER,
            header::ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            header::CONTENT_TYPE,
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
