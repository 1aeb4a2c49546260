//! # JSON 요청 본문 추출기
//!
//! axum 기본 `Json<T>` 추출기는 실패 시 일반 텍스트 응답을 돌려줍니다.
//! `AppJson<T>`는 같은 방식으로 파싱하되, 실패 사유(`JsonRejection`)를
//! `AppError::Validation`으로 바꿔 `{ "error": { ... } }` 형태의 JSON으로 응답합니다.

use crate::error::AppError;
use axum::extract::FromRequest; // 요청 전체(본문 포함)에서 값을 뽑는 추출자 트레이트 + derive 매크로

/// `Json<T>`와 같지만 거절 응답이 `AppError` 형식인 추출기
///
/// `#[derive(FromRequest)]` (axum의 "macros" feature):
/// - `via(axum::Json)`: 실제 파싱은 `axum::Json`에 맡기고
/// - `rejection(AppError)`: 실패하면 `From<JsonRejection> for AppError`로 변환합니다
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
