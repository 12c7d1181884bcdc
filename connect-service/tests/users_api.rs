use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use connect_service::{app, config::Config, models::UserResponse};
use serde_json::json;
use tower::util::ServiceExt; // for `oneshot`

async fn post_users(body: impl Into<Body>) -> Response {
    app(&Config::default())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/createUser")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn create_user_happy_path() {
    let body = json!([{
        "user_id": 1234,
        "name": "John",
        "date_of_birth": "1998-02-03",
        "created_on": 1234578564
    }]);

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        body_string(response).await,
        r#"[{"user_id":1234,"name":"John","date_of_week":"Tuesday","create_on_rfc":"2009-02-14T02:29:24Z"}]"#
    );
}

#[tokio::test]
async fn create_users_preserves_order() {
    let body = json!([
        {"user_id": 3, "name": "Carol", "date_of_birth": "2000-01-01", "created_on": 1},
        {"user_id": 1, "name": "Alice", "date_of_birth": "1990-08-06", "created_on": 1642612034},
        {"user_id": 2, "name": "Bob", "date_of_birth": "2024-02-29", "created_on": 86400}
    ]);

    let response = post_users(body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<UserResponse> = serde_json::from_str(&body_string(response).await).unwrap();
    let summary: Vec<(i64, &str, &str)> = users
        .iter()
        .map(|u| (u.user_id, u.name.as_str(), u.day_of_week.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (3, "Carol", "Saturday"),
            (1, "Alice", "Monday"),
            (2, "Bob", "Thursday"),
        ]
    );
    assert_eq!(users[0].created_on_formatted, "1970-01-01T00:00:01Z");
    assert_eq!(users[2].created_on_formatted, "1970-01-02T00:00:00Z");
}

#[tokio::test]
async fn empty_batch_returns_empty_array() {
    let response = post_users("[]").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn missing_user_id_is_unprocessable() {
    let body = json!([{"name": "John", "date_of_birth": "1998-02-03", "created_on": 1234578564}]);

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_string(response).await, "user_id is required");
}

#[tokio::test]
async fn missing_name_is_unprocessable() {
    let body = json!([{"user_id": 1234, "date_of_birth": "1998-02-03", "created_on": 1234578564}]);

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_string(response).await, "name is required");
}

#[tokio::test]
async fn each_required_field_is_reported() {
    let cases = [
        (json!({"user_id": 0, "name": "John", "date_of_birth": "1998-02-03", "created_on": 1}), "user_id is required"),
        (json!({"user_id": 1, "name": "", "date_of_birth": "1998-02-03", "created_on": 1}), "name is required"),
        (json!({"user_id": 1, "name": "John", "date_of_birth": null, "created_on": 1}), "date_of_birth is required"),
        (json!({"user_id": 1, "name": "John", "date_of_birth": "1998-02-03"}), "created_on is required"),
    ];

    for (record, expected) in cases {
        let response = post_users(json!([record]).to_string()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_string(response).await, expected);
    }
}

#[tokio::test]
async fn invalid_record_aborts_whole_batch() {
    // The third record is invalid; the bad date in the second must not be reached
    let body = json!([
        {"user_id": 1, "name": "Alice", "date_of_birth": "1990-08-06", "created_on": 1},
        {"user_id": 2, "name": "Bob", "date_of_birth": "not-a-date", "created_on": 1},
        {"user_id": 3, "date_of_birth": "1990-08-06", "created_on": 1}
    ]);

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_string(response).await, "name is required");
}

#[tokio::test]
async fn unparsable_date_is_unprocessable() {
    let body = json!([
        {"user_id": 1, "name": "Alice", "date_of_birth": "1990-08-06", "created_on": 1},
        {"user_id": 2, "name": "Bob", "date_of_birth": "02-03-1998", "created_on": 1}
    ]);

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let text = body_string(response).await;
    assert!(text.contains("date_of_birth"), "unexpected body: {text}");
    assert!(!text.contains("Alice"));
}

#[tokio::test]
async fn out_of_range_created_on_is_unprocessable() {
    let body = json!([{"user_id": 1, "name": "A", "date_of_birth": "1990-08-06", "created_on": i64::MAX}]);

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn single_object_is_bad_request() {
    let body = json!({
        "user_id": 1234,
        "name": "Joe Smith",
        "date_of_birth": "1998-02-03",
        "created_on": 1234578564
    });

    let response = post_users(body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = post_users("[{\"user_id\": 1,").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_users(r#"[{"user_id": "one"}]"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_bad_request() {
    let mut config = Config::default();
    config.middleware.body_limit_mb = 1;

    let padding = "x".repeat(2 * 1024 * 1024);
    let body = json!([{"user_id": 1, "name": padding, "date_of_birth": "1990-08-06", "created_on": 1}]);

    let response = app(&config)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/createUser")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let response = app(&Config::default())
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/createUser")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(body_string(response).await.is_empty());
}
