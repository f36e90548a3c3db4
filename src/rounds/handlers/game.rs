use crate::app_context::AppContext;
use crate::map::models::LatLng;
use crate::rounds::handlers::http::{CreateGameHttpHandler, GameHttpHandler};
use crate::rounds::handlers::requests::AnswerPositionRequest;
use crate::rounds::handlers::responses::{
    CreateGameResponse, GameActionResponse, GameStateResponse, SubmitGuessResponse,
};
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn create<GS>(State(app_context): State<AppContext<GS>>) -> Json<CreateGameResponse>
where
    GS: IGameStorage,
{
    let response = CreateGameHttpHandler::new(app_context).create().await;
    Json(response)
}

pub async fn state<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameStateResponse>
where
    GS: IGameStorage,
{
    let response = GameHttpHandler::new(app_context, &game_id).state().await;
    Json(response)
}

pub async fn save_guess<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(guess): Json<LatLng>,
) -> Json<GameActionResponse>
where
    GS: IGameStorage,
{
    let response = GameHttpHandler::new(app_context, &game_id)
        .save_guess(guess)
        .await;
    Json(response)
}

pub async fn submit_guess<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<SubmitGuessResponse>
where
    GS: IGameStorage,
{
    let response = GameHttpHandler::new(app_context, &game_id)
        .submit_guess()
        .await;
    Json(response)
}

pub async fn next_round<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameActionResponse>
where
    GS: IGameStorage,
{
    let response = GameHttpHandler::new(app_context, &game_id)
        .next_round()
        .await;
    Json(response)
}

pub async fn retry<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameActionResponse>
where
    GS: IGameStorage,
{
    let response = GameHttpHandler::new(app_context, &game_id).retry().await;
    Json(response)
}

/// The panorama viewer reports the position the requested panorama actually sits at.
pub async fn answer_position<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(request): Json<AnswerPositionRequest>,
) -> Json<GameActionResponse>
where
    GS: IGameStorage,
{
    let response = GameHttpHandler::new(app_context, &game_id)
        .correct_answer(request.pano_id, request.position())
        .await;
    Json(response)
}
