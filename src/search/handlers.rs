use crate::app_context::AppContext;
use crate::kakao::local::LocalSearchClient;
use crate::search::errors::SearchError;
use crate::search::requests::SearchRequest;
use crate::search::responses::SearchResponse;
use crate::storage::interface::IGameStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn search<GS>(
    State(app_context): State<AppContext<GS>>,
    request: Option<Json<SearchRequest>>,
) -> Result<Json<SearchResponse>, SearchError>
where
    GS: IGameStorage,
{
    let kakao = &app_context.kakao;
    let rest_api_key = kakao
        .rest_api_key
        .as_deref()
        .ok_or(SearchError::MissingApiKey)?;
    let query = request
        .map(|Json(request)| request.query)
        .unwrap_or_default();
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let results = LocalSearchClient::new(&app_context.http_client, &kakao.api_url, rest_api_key)
        .search(&query)
        .await?;
    tracing::info!(task = "place_search", results = results.len());
    Ok(Json(SearchResponse { results }))
}
