use crate::http::tests::{fake_kakao_config, test_context, test_server, test_server_with};
use crate::kakao::env::non_empty;
use crate::kakao::responses::ClientConfigResponse;
use url::Url;

#[tokio::test]
async fn test_client_config_exposes_the_map_key() {
    let server = test_server();

    let response = server.get("/config/client").await;

    response.assert_status_ok();
    response.assert_json(&ClientConfigResponse {
        error: false,
        map_key: Some(String::from("testMapKey")),
    });
}

#[tokio::test]
async fn test_client_config_without_map_key() {
    let mut kakao = fake_kakao_config(
        Url::parse("http://127.0.0.1:9").expect("Failed to construct fake Kakao API URL."),
    );
    kakao.map_key = None;
    let server = test_server_with(test_context(kakao));

    let response = server.get("/config/client").await;

    response.assert_json(&serde_json::json!({"error": false, "mapKey": null}));
}

#[test]
fn test_blank_secret_counts_as_missing() {
    assert_eq!(non_empty(Some(String::from("   "))), None);
    assert_eq!(non_empty(Some(String::new())), None);
    assert_eq!(non_empty(None), None);
    assert_eq!(
        non_empty(Some(String::from("abc"))),
        Some(String::from("abc"))
    );
}
