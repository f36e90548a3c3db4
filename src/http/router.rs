use crate::app_context::AppContext;
use crate::cli::Args;
use crate::rounds::handlers::game;
use crate::storage::games::HashMapGamesStorage;
use crate::{health, http, kakao, search};
use axum::{
    routing::{get, post},
    Router,
};

type Storage = HashMapGamesStorage;

pub fn new(args: &Args, app_context: AppContext<Storage>) -> Router {
    let cors_policy = http::cors_layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let config_routes =
        Router::new().route("/client", get(kakao::handlers::client_config::<Storage>));
    let games_routes = Router::new()
        .route("/", post(game::create::<Storage>))
        .route("/:game-id", get(game::state::<Storage>))
        .route("/:game-id/guess", post(game::save_guess::<Storage>))
        .route("/:game-id/submit", post(game::submit_guess::<Storage>))
        .route("/:game-id/next-round", post(game::next_round::<Storage>))
        .route("/:game-id/retry", post(game::retry::<Storage>))
        .route("/:game-id/answer-position", post(game::answer_position::<Storage>));

    Router::new()
        .nest("/health", health_routes)
        .nest("/config", config_routes)
        .nest("/games", games_routes)
        .route("/search", post(search::handlers::search::<Storage>))
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
