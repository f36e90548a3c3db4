use crate::search::responses::SearchErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("KAKAO_REST_API_KEY is not configured on the server.")]
    MissingApiKey,
    #[error("Please enter a search query.")]
    EmptyQuery,
    #[error("Kakao Local search failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyQuery => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Upstream details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Upstream(_) => String::from("An error occurred while searching."),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(_) => tracing::error!("{self}"),
            Self::MissingApiKey => tracing::warn!("{self}"),
            Self::EmptyQuery => {}
        }
        let body = SearchErrorResponse {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
