//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 어떤 에러도 내부에서 재시도하지 않습니다.
//! 핸들러 아래에서 생긴 에러는 그대로 위로 전파되고, 여기서 한 번에 응답으로 바뀝니다.

use axum::{
    extract::rejection::JsonRejection,  // JSON 본문 추출 실패 사유
    http::StatusCode,                   // HTTP 상태 코드 (200, 422, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청 본문이 기대한 JSON 모양이 아님 (HTTP 400 / 415 / 422)
    ///
    /// 저장소에 닿기 전에 거절됩니다.
    /// 상태 코드는 axum이 분류한 실패 원인을 그대로 따릅니다:
    /// - 필드 누락, 타입 불일치 → 422
    /// - JSON 문법 오류 → 400
    /// - Content-Type 누락 → 415
    #[error("Invalid request body: {0}")]
    Validation(#[from] JsonRejection),

    /// 데이터베이스 오류 (HTTP 500)
    /// 연결 거부, 쿼리 실패, 제약 조건 위반을 구분하지 않습니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 서버 쪽 에러(Database)는 실제 내용을 로그에만 남기고,
    /// 클라이언트에는 일반적인 메시지만 돌려줍니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // ref: 값을 이동(move)하지 않고 참조만 빌려옵니다.
            AppError::Validation(ref rejection) => (
                rejection.status(),
                "validation_error",
                // body_text(): serde가 알려준 실패 이유 (예: "missing field `client_name`")
                rejection.body_text(),
            ),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "validation_error", "message": "..." } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
