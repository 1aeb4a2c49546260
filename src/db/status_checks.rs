//! # 상태 체크 데이터베이스 쿼리 모듈
//!
//! `status_checks` 테이블에 대한 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! ## 세션(연결) 수명
//! 각 함수는 풀에서 연결 하나(또는 트랜잭션 하나)를 빌려 쿼리 한 번을 실행합니다.
//! 빌린 연결은 RAII 가드라서 `?`로 중간에 빠져나가도 drop 시점에 반드시 반환됩니다:
//! - `Transaction`: commit 없이 drop되면 자동 롤백 후 풀로 반환
//! - `PoolConnection`: drop되면 풀로 반환

use crate::error::AppError; // sqlx::Error가 `?`로 자동 변환되는 대상
use crate::models::*;       // StatusCheck
use chrono::Utc;            // 현재 UTC 시각
use sqlx::SqlitePool;

/// 새 상태 체크를 저장하고 저장된 레코드를 반환합니다.
///
/// ## 처리 흐름
/// 1. UUIDv4로 ID를, 현재 UTC 시각으로 타임스탬프를 생성 (둘 다 서버가 결정)
/// 2. 트랜잭션 안에서 INSERT 실행
/// 3. commit 후 방금 만든 레코드를 그대로 반환
///
/// 같은 `client_name`으로 여러 번 호출하면 서로 다른 레코드가 생깁니다.
pub async fn insert_status_check(
    pool: &SqlitePool,
    client_name: &str,
) -> Result<StatusCheck, AppError> {
    let record = StatusCheck {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: client_name.to_string(),
        timestamp: Utc::now(),
    };

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES (?, ?, ?)")
        .bind(&record.id)
        .bind(&record.client_name)
        .bind(record.timestamp)
        // &mut *tx: Transaction을 역참조해 내부 연결을 실행기(Executor)로 넘깁니다
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!(id = %record.id, "Inserted status check");
    Ok(record)
}

/// 저장된 모든 상태 체크를 조회합니다.
///
/// 정렬을 지정하지 않으므로 순서는 저장소가 돌려주는 그대로입니다.
/// 페이지네이션도 없습니다 (전체 테이블 스캔).
pub async fn list_status_checks(pool: &SqlitePool) -> Result<Vec<StatusCheck>, AppError> {
    let mut conn = pool.acquire().await?;

    let records = sqlx::query_as::<_, StatusCheck>(
        "SELECT id, client_name, timestamp FROM status_checks",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}
