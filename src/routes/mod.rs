//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과, 이들을 묶는 라우터를 정의합니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `extract`: 에러 응답 형식을 맞춘 JSON 본문 추출기
//! - `health`: 서버/DB 상태 확인 (헬스체크)
//! - `root`: 고정 인사 메시지
//! - `status`: 상태 체크 생성/목록 핸들러

pub mod extract;
pub mod health;
pub mod root;
pub mod status;

pub use health::*;
pub use root::*;
pub use status::*;

use axum::{
    routing::get, // GET 메서드 라우팅 (.post()는 체이닝으로 추가)
    Router,       // URL 경로와 핸들러를 연결하는 구조체
};
use sqlx::SqlitePool; // SQLite 연결 풀 타입
use tower_http::{
    cors::CorsLayer,   // CORS(Cross-Origin Resource Sharing) 설정
    trace::TraceLayer, // HTTP 요청/응답 로깅 미들웨어
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 프로세스에 하나뿐인 연결 풀을 담고 있으며, 요청마다 여기서 연결을 빌립니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유되므로 clone 비용이 작음)
    pub pool: SqlitePool,
}

/// 전체 라우터를 구성합니다.
///
/// 모든 API는 `/api` 아래에 있습니다:
/// - `GET  /api/`       → 인사 메시지
/// - `POST /api/status` → 상태 체크 생성
/// - `GET  /api/status` → 상태 체크 목록
/// - `GET  /api/health` → 헬스체크
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        // 중첩된 "/"는 "/api"에 매핑됩니다. "/api/"는 아래에서 따로 등록합니다.
        .route("/", get(root))
        .route("/status", get(list_status_checks).post(create_status_check))
        .route("/health", get(health_check))
        .with_state(state);

    // CORS: 모든 출처/메서드/헤더 허용, 자격 증명(쿠키 등)도 허용합니다.
    // very_permissive()는 요청의 Origin을 그대로 돌려주므로
    // `*`와 credentials를 함께 쓸 수 없는 브라우저 규칙에도 걸리지 않습니다.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .nest("/api", api_routes)
        .route("/api/", get(root))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
