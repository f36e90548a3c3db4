use crate::map::models::DistanceResult;
use crate::rounds::models::{GameActionError, RoundSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameActionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<RoundSnapshot>,
}

/// Answer to every intent that only changes state.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameActionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameActionError>,
}

impl From<Result<(), GameActionError>> for GameActionResponse {
    fn from(result: Result<(), GameActionError>) -> Self {
        Self {
            error: result.is_err(),
            error_code: result.err(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameActionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<DistanceResult>,
}
