use crate::app_context::AppContext;
use crate::map::models::LatLng;
use crate::panorama::PanoramaId;
use crate::rounds::handlers::responses::{
    CreateGameResponse, GameActionResponse, GameStateResponse, SubmitGuessResponse,
};
use crate::rounds::models::GameActionError;
use crate::storage::interface::IGameStorage;

pub struct CreateGameHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS> CreateGameHttpHandler<GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateGameResponse {
        let game_id = self.app_context.games.create().await;
        tracing::info!(task = "game_created", game_id = %game_id);
        self.app_context.rounds.boot(&game_id);
        CreateGameResponse { game_id }
    }
}

pub struct GameHttpHandler<'a, GS: IGameStorage> {
    app_context: AppContext<GS>,
    game_id: &'a str,
}

impl<'a, GS> GameHttpHandler<'a, GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>, game_id: &'a str) -> Self {
        Self {
            app_context,
            game_id,
        }
    }

    pub async fn state(&self) -> GameStateResponse {
        match self.app_context.games.snapshot(self.game_id).await {
            Some(snapshot) => GameStateResponse {
                error: false,
                error_code: None,
                game: Some(snapshot),
            },
            None => GameStateResponse {
                error: true,
                error_code: Some(GameActionError::GameNotFound),
                game: None,
            },
        }
    }

    pub async fn save_guess(&self, guess: LatLng) -> GameActionResponse {
        self.app_context
            .games
            .set_guess(self.game_id, guess)
            .await
            .into()
    }

    pub async fn submit_guess(&self) -> SubmitGuessResponse {
        match self.app_context.games.submit(self.game_id).await {
            Ok(distance) => {
                tracing::info!(
                    task = "round_finished",
                    game_id = %self.game_id,
                    reason = "submitted",
                    distance_km = distance.km,
                    distance = %distance.formatted,
                );
                SubmitGuessResponse {
                    error: false,
                    error_code: None,
                    distance: Some(distance),
                }
            }
            Err(err) => SubmitGuessResponse {
                error: true,
                error_code: Some(err),
                distance: None,
            },
        }
    }

    pub async fn next_round(&self) -> GameActionResponse {
        self.app_context
            .rounds
            .next_round(self.game_id)
            .await
            .into()
    }

    pub async fn retry(&self) -> GameActionResponse {
        self.app_context.rounds.retry(self.game_id).await.into()
    }

    pub async fn correct_answer(&self, pano_id: PanoramaId, position: LatLng) -> GameActionResponse {
        self.app_context
            .games
            .correct_answer(self.game_id, pano_id, position)
            .await
            .into()
    }
}
