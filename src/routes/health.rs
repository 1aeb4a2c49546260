//! # 헬스체크(Health Check) 핸들러
//!
//! 서버와 데이터베이스가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "status": "ok", "database": "ok" }`
//!
//! DB 연결이 끊겼으면 다른 저장소 오류와 똑같이 500 응답이 나갑니다.
//! 로드밸런서나 컨테이너 오케스트레이터의 상태 확인용입니다.

use crate::{db, error::AppError, routes::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value}; // JSON 객체 생성용 매크로와 범용 JSON 타입

/// `GET /api/health`: 풀에서 연결 하나를 빌려 `SELECT 1`을 실행합니다.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    db::ping(&state.pool).await?;

    Ok(Json(json!({
        "status": "ok",
        "database": "ok"
    })))
}
