//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `status_check`: 상태 체크 레코드와 생성 요청
//!
//! `pub use X::*;`로 재공개하여 `crate::models::StatusCheck`처럼 짧게 접근합니다.

pub mod status_check;

pub use status_check::*;
