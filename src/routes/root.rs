//! # 인사(Greeting) 핸들러
//!
//! - `GET /api/` → `{ "message": "Hello World" }`
//!
//! 저장된 데이터와 무관하게 항상 같은 응답을 돌려줍니다.

use axum::Json;                // JSON 응답 래퍼
use serde_json::{json, Value}; // JSON 생성 유틸리티

/// `GET /api/`: 고정된 인사 메시지를 반환합니다.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
