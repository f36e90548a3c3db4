use crate::app_context::AppContext;
use crate::kakao::responses::ClientConfigResponse;
use crate::storage::interface::IGameStorage;
use axum::extract::State;
use axum::response::Json;

/// Settings the browser needs to bootstrap the Kakao map SDK.
pub async fn client_config<GS>(
    State(app_context): State<AppContext<GS>>,
) -> Json<ClientConfigResponse>
where
    GS: IGameStorage,
{
    Json(ClientConfigResponse {
        error: false,
        map_key: app_context.kakao.map_key.clone(),
    })
}
