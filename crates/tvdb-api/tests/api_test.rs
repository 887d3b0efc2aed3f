#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use serde_json::json;
use tvdb_api::types::{Award, Series};
use tvdb_api::{
    LocalTvdbApi, Method, RemoteApi, Result, SearchParams, SessionStatus, TvdbClient, TvdbError,
};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(mock_server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/v4/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"token": token}, "status": "success"})),
        )
        .expect(times)
        .mount(mock_server)
        .await;
}

fn client(mock_server: &MockServer) -> TvdbClient {
    TvdbClient::builder()
        .base_url(format!("{}/v4", mock_server.uri()).parse().unwrap())
        .api_key("ABC123")
        .language("eng")
        .build()
        .unwrap()
}

/// Code written against the trait works with the HTTP client.
async fn series_title<A: LocalTvdbApi>(api: &A, id: u64) -> Result<String> {
    let series = api.series(id).await?;
    Ok(series.name.unwrap_or_default())
}

#[tokio::test]
async fn test_lazy_login_then_typed_request() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "tok-1", 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/series/81189"))
        .and(header("Authorization", "Bearer tok-1"))
        .and(header("Accept-Language", "eng"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 81189, "name": "Breaking Bad"},
            "status": "success"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);
    assert_eq!(client.status().await, SessionStatus::NotAuthorized);

    // Act
    let first = series_title(&client, 81_189).await.unwrap();
    let second = series_title(&client, 81_189).await.unwrap();

    // Assert
    assert_eq!(first, "Breaking Bad");
    assert_eq!(second, "Breaking Bad");
    assert_eq!(client.status().await, SessionStatus::Authorized);
    assert_eq!(client.token().await.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_expired_token_is_replaced_once() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "fresh", 2).await;
    Mock::given(method("GET"))
        .and(path("/v4/awards/1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/awards/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "name": "Emmy"},
            "status": "success"
        })))
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let award = client.award(1).await.unwrap();

    // Assert
    assert_eq!(award.name.as_deref(), Some("Emmy"));
    assert!(client.is_authorized().await);
}

#[tokio::test]
async fn test_remote_error_carries_status_and_message() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "tok", 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/movies/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"status": "failure", "message": "NotFoundException"})),
        )
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let err = client.movie(404).await.unwrap_err();

    // Assert
    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(
        &err,
        TvdbError::RemoteService { payload, .. } if payload.message() == Some("NotFoundException")
    ));
}

#[tokio::test]
async fn test_malformed_field_reports_path() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "tok", 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/series/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 2, "name": ["not", "a", "string"]},
            "status": "success"
        })))
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let err = client.series(2).await.unwrap_err();

    // Assert
    assert!(matches!(
        err,
        TvdbError::MalformedResponse { path: Some(ref p), .. } if p == "data.name"
    ));
}

#[tokio::test]
async fn test_raw_json_keeps_whole_envelope() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "tok", 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/search"))
        .and(query_param("query", "the office"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "The Office", "tvdb_id": "73244", "extra": true}],
            "status": "success",
            "links": {"next": null}
        })))
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let value = client
        .json()
        .search(&SearchParams::new("the office"))
        .await
        .unwrap();

    // Assert
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"][0]["extra"], true);
}

#[tokio::test]
async fn test_generic_send_reaches_any_resource() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "tok", 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/awards/categories/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 3, "name": "Best Drama", "award": {"id": 1, "name": "Emmy"}},
            "status": "success"
        })))
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let typed = client.award_category(3).await.unwrap();
    let response = client
        .send::<serde_json::Value, ()>(Method::GET, "/awards/categories/3", None)
        .await
        .unwrap();

    // Assert
    assert_eq!(typed.award, Some(Award { id: 1, name: Some(String::from("Emmy")) }));
    assert_eq!(response.into_data().unwrap()["name"], "Best Drama");
}

#[tokio::test]
async fn test_concurrent_calls_share_one_login() {
    // Arrange
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "tok", 1).await;
    Mock::given(method("GET"))
        .and(path("/v4/series/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "name": "One"},
            "status": "success"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/series/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 2, "name": "Two"},
            "status": "success"
        })))
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let (one, two): (Result<Series>, Result<Series>) =
        tokio::join!(client.series(1), client.series(2));

    // Assert
    assert_eq!(one.unwrap().name.as_deref(), Some("One"));
    assert_eq!(two.unwrap().name.as_deref(), Some("Two"));
}

#[tokio::test]
async fn test_rejected_api_key_is_authentication_error() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "InvalidAPIKey"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    let client = client(&mock_server);

    // Act
    let err = client.genres().await.unwrap_err();

    // Assert
    assert!(matches!(err, TvdbError::Authentication(ref m) if m.contains("InvalidAPIKey")));
    assert_eq!(client.status().await, SessionStatus::NotAuthorized);
}

#[tokio::test]
async fn test_custom_remote_api_is_used() {
    // Arrange
    let mock_server = MockServer::start().await;
    let address = mock_server.address();
    Mock::given(method("POST"))
        .and(path("/api/v4/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"token": "t"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(any())
        .and(path("/v4/login"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    let remote = RemoteApi::new(
        "http",
        address.ip().to_string(),
        Some(address.port()),
        "/api/v4",
    )
    .unwrap();
    let client = TvdbClient::builder()
        .api_key("ABC123")
        .remote_api(remote)
        .build()
        .unwrap();

    // Act
    client.login().await.unwrap();

    // Assert
    assert_eq!(client.token().await.as_deref(), Some("t"));
}
