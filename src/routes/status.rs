//! # 상태 체크 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/status | `create_status_check` | 상태 체크 한 건 생성 |
//! | GET | /api/status | `list_status_checks` | 전체 상태 체크 목록 |
//!
//! 각 핸들러는 DB 작업을 정확히 한 번 수행합니다.
//! 요청 본문이 잘못되면 추출 단계에서 거절되므로 DB 작업은 0번입니다.

use crate::{
    db,                                   // 데이터베이스 쿼리 모듈
    error::AppError,                      // 자동으로 HTTP 에러 응답으로 변환됨
    models::*,                            // StatusCheck, CreateStatusCheckRequest
    routes::{extract::AppJson, AppState}, // JSON 본문 추출기, 공유 상태
};
use axum::{
    extract::State, // 앱 상태 추출자
    Json,           // JSON 응답 래퍼
};

/// 새 상태 체크를 생성합니다.
///
/// `POST /api/status` + `{ "client_name": "..." }` → 저장된 레코드
///
/// `AppJson(req)`는 반드시 마지막 인자여야 합니다.
/// 요청 본문을 소비(consume)하는 추출기는 하나만, 맨 뒤에 올 수 있습니다.
pub async fn create_status_check(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheck>, AppError> {
    let record = db::insert_status_check(&state.pool, &req.client_name).await?;
    Ok(Json(record))
}

/// 저장된 모든 상태 체크를 JSON 배열로 반환합니다.
///
/// `GET /api/status` → `[ { "id": ..., "client_name": ..., "timestamp": ... }, ... ]`
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let records = db::list_status_checks(&state.pool).await?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use crate::{db::test_pool, routes::{router, AppState}};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use chrono::{DateTime, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn app() -> Router {
        router(AppState {
            pool: test_pool().await,
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_status(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/status")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let app = app().await;

        for uri in ["/api", "/api/"] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Hello World");
        }

        // 저장된 데이터가 있어도 응답은 같습니다.
        send(&app, post_status(r#"{"client_name": "x"}"#)).await;
        let (_, body) = send(&app, get("/api/")).await;
        assert_eq!(body, serde_json::json!({ "message": "Hello World" }));
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        let app = app().await;

        let (status, body) = send(&app, get("/api/status")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn create_then_list_includes_record() {
        let app = app().await;
        let before = Utc::now();

        let (status, created) =
            send(&app, post_status(r#"{"client_name": "acme-sensor-1"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["client_name"], "acme-sensor-1");
        let id = created["id"].as_str().unwrap();
        assert_eq!(id.len(), 36);
        let timestamp: DateTime<Utc> = created["timestamp"].as_str().unwrap().parse().unwrap();
        assert!(timestamp >= before && timestamp <= Utc::now());

        let (status, listed) = send(&app, get("/api/status")).await;
        assert_eq!(status, StatusCode::OK);
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["id"], id);
        assert_eq!(listed[0]["client_name"], "acme-sensor-1");
    }

    #[tokio::test]
    async fn repeated_posts_create_distinct_records() {
        let app = app().await;

        let (_, first) = send(&app, post_status(r#"{"client_name": "same"}"#)).await;
        let (_, second) = send(&app, post_status(r#"{"client_name": "same"}"#)).await;
        assert_ne!(first["id"], second["id"]);

        let (_, listed) = send(&app, get("/api/status")).await;
        let mut ids: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        ids.sort();
        let mut expected = vec![first["id"].as_str().unwrap(), second["id"].as_str().unwrap()];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn empty_and_unicode_names_are_accepted() {
        let app = app().await;
        let long = "a".repeat(10_000);

        for name in ["", "센서 🚀", long.as_str()] {
            let body = serde_json::json!({ "client_name": name }).to_string();
            let (status, created) = send(&app, post_status(&body)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(created["client_name"], name);
        }
    }

    #[tokio::test]
    async fn invalid_bodies_are_rejected_without_storing() {
        let app = app().await;

        for body in [
            r#"{}"#,
            r#"{"client_name": 42}"#,
            r#"{"client_name": null}"#,
            r#"{"name": "wrong-field"}"#,
            r#"["acme"]"#,
            r#"[]"#,
            r#""acme""#,
            r#"42"#,
            r#"null"#,
        ] {
            let (status, error) = send(&app, post_status(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
            assert_eq!(error["error"]["code"], "validation_error");

            // 거절된 요청은 저장소를 건드리지 않습니다
            let (_, listed) = send(&app, get("/api/status")).await;
            assert_eq!(listed, serde_json::json!([]), "body: {body}");
        }

        let (status, error) = send(&app, post_status("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"]["code"], "validation_error");

        let (_, listed) = send(&app, get("/api/status")).await;
        assert_eq!(listed, serde_json::json!([]));
    }

    #[tokio::test]
    async fn missing_content_type_is_client_error() {
        let app = app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/status")
            .body(Body::from(r#"{"client_name": "x"}"#))
            .unwrap();

        let (status, error) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(error["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn closed_pool_yields_server_error() {
        let pool = test_pool().await;
        let app = router(AppState { pool: pool.clone() });
        pool.close().await;

        let (status, error) = send(&app, get("/api/status")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error["error"]["code"], "database_error");

        let (status, _) = send(&app, get("/api/health")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app().await;

        let (status, body) = send(&app, get("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "ok");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = app().await;
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/status")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://example.com"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}
