//! # 상태 체크 서비스 진입점
//!
//! 이 파일은 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 스키마 초기화 (실패하면 요청을 받기 전에 종료)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작, 종료 신호를 받으면 풀 정리

// `mod` 키워드로 같은 디렉토리의 파일(또는 폴더/mod.rs)을 모듈로 가져옵니다.
mod config; // 설정
mod db;     // 데이터베이스 접근 계층
mod error;  // 에러 타입과 HTTP 응답 변환
mod models; // 데이터 구조체
mod routes; // HTTP 핸들러와 라우터

use anyhow::Result;     // 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use config::Config;     // 환경변수에서 읽은 설정
use routes::AppState;   // 모든 핸들러가 공유하는 상태 (DB 풀)
use tokio::signal;      // Ctrl+C, SIGTERM 같은 종료 신호 대기
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "status_service=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    tracing::info!("Starting status service on {}", config.bind_addr());

    // ── 4단계: 연결 풀 생성 ──
    // 풀은 프로세스 전체에서 하나만 만들고, 종료할 때 한 번 닫습니다.
    let pool = db::connect(&config).await?;

    // ── 5단계: 스키마 초기화 ──
    // `?`: 실패하면 main이 Err를 반환하고 프로세스가 종료됩니다.
    // 리스너를 열기 전이므로 스키마 없이 요청을 받는 일은 없습니다.
    tracing::info!("Initializing database schema...");
    db::init_schema(&pool).await?;

    // ── 6단계: 라우터 구성 ──
    let app = routes::router(AppState { pool: pool.clone() });

    // ── 7단계: 서버 시작 ──
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // with_graceful_shutdown(): 신호를 받으면 새 연결을 그만 받고,
    // 처리 중인 요청이 끝날 때까지 기다린 뒤 serve가 반환됩니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // ── 8단계: 정리 ──
    pool.close().await;
    tracing::info!("Database pool closed, bye");

    Ok(())
}

/// Ctrl+C 또는 SIGTERM을 기다립니다.
///
/// 핸들러 설치에 실패한 쪽은 영원히 대기하고, 나머지 신호만 받습니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down..."),
    }
}
