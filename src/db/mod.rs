//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 이 모듈의 함수만 호출하고, SQL을 직접 다루지 않습니다.
//!
//! 이 파일은 연결 풀 생성과 스키마 초기화처럼 "서버 시작 시 한 번" 하는 일을 담당하고,
//! 실제 레코드 쿼리는 하위 모듈에 있습니다:
//! - `status_checks`: 상태 체크 생성/목록 쿼리

pub mod status_checks;

pub use status_checks::*;

use crate::{config::Config, error::AppError};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions}, // 연결 문자열 파싱 옵션, 풀 설정 옵션
    SqlitePool,                                        // SQLite 연결 풀
};
use std::str::FromStr; // 문자열 → SqliteConnectOptions 변환에 필요한 트레이트

/// `status_checks` 테이블 정의
///
/// `IF NOT EXISTS` 덕분에 몇 번을 실행해도 결과가 같습니다(멱등).
/// 기본 키 외의 인덱스나 다른 테이블은 없습니다.
const CREATE_STATUS_CHECKS: &str = "
    CREATE TABLE IF NOT EXISTS status_checks (
        id          TEXT PRIMARY KEY NOT NULL,
        client_name TEXT NOT NULL,
        timestamp   DATETIME NOT NULL
    )";

/// 설정의 연결 문자열로 SQLite 연결 풀을 만듭니다.
///
/// DB 파일이 없으면 새로 만들고(`create_if_missing`),
/// 파일이 들어갈 디렉토리(예: `data/`)도 미리 생성합니다.
/// 풀은 프로세스 전체에서 하나만 만들어 `AppState`로 공유합니다.
pub async fn connect(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    // 인메모리 DB(":memory:")는 부모 디렉토리가 빈 경로이므로 건너뜁니다.
    if let Some(dir) = options
        .get_filename()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        if !dir.exists() {
            tokio::fs::create_dir_all(dir).await?;
            tracing::info!("Created database directory: {}", dir.display());
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// 스키마를 초기화합니다. 서버 시작 시 딱 한 번 호출됩니다.
///
/// 실패하면 에러를 그대로 돌려주고, `main`은 요청을 받기 전에 종료합니다.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_STATUS_CHECKS).execute(pool).await?;
    Ok(())
}

/// DB 연결이 살아 있는지 확인합니다 (`SELECT 1`).
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// 테스트용 인메모리 풀
///
/// SQLite의 `:memory:` DB는 연결마다 따로 생기므로 연결을 1개로 고정하고,
/// 유휴 연결이 닫혀 데이터가 사라지지 않도록 수명 제한도 끕니다.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
