//! # 상태 체크(StatusCheck) 모델 정의
//!
//! 이 서비스가 저장하는 유일한 엔티티와, 생성 요청 본문을 정의합니다.
//!
//! ## 구조체 역할
//! - `StatusCheck`: 데이터베이스에 저장된 상태 체크 한 건 (응답용)
//! - `CreateStatusCheckRequest`: 새 상태 체크 생성 시 클라이언트가 보내는 JSON 본문

use chrono::{DateTime, Utc};                  // UTC 기준 날짜/시간 타입
use serde::de::{self, MapAccess, Visitor};   // 수동 역직렬화에 필요한 serde 트레이트
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 상태 체크 엔티티: DB의 `status_checks` 테이블 한 행(row)에 대응합니다.
///
/// 한 번 만들어지면 바뀌지 않습니다. 수정/삭제 API는 없습니다.
///
/// # derive 매크로 설명
/// - `Serialize`: API 응답으로 JSON 변환
/// - `sqlx::FromRow`: SELECT 결과의 컬럼 이름(id, client_name, timestamp)을
///   같은 이름의 필드에 매핑합니다. 행 ↔ 구조체 변환은 이것 하나로 끝납니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StatusCheck {
    /// 서버가 생성하는 고유 식별자 (하이픈 포함 UUIDv4, 36자)
    pub id: String,
    /// 클라이언트가 보낸 이름. 길이/형식 제한 없음
    pub client_name: String,
    /// 서버가 INSERT 시점에 기록한 시각 (UTC)
    /// JSON으로는 RFC 3339 문자열(예: "2024-05-01T12:00:00.123456Z")로 나갑니다.
    pub timestamp: DateTime<Utc>,
}

/// 상태 체크 생성 요청: `POST /api/status`의 요청 본문(body)에 해당합니다.
///
/// `client_name`이 없거나 문자열이 아니면 serde 역직렬화가 실패하고,
/// 핸들러는 호출되지도 않습니다. 그 외의 필드는 무시됩니다.
///
/// `#[derive(Deserialize)]`를 쓰지 않는 이유:
/// derive된 구조체는 `["acme"]` 같은 JSON 배열도 필드 순서대로 받아들입니다.
/// 요청 본문은 반드시 JSON 객체여야 하므로 `visit_map`만 구현한 Visitor를 씁니다.
#[derive(Debug)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

impl<'de> Deserialize<'de> for CreateStatusCheckRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateStatusCheckVisitor)
    }
}

/// 객체(map)만 받아들이는 Visitor
///
/// 배열, 문자열, 숫자 등이 오면 serde가 `expecting()` 문구로
/// "invalid type" 에러를 만들고, axum은 이를 422로 분류합니다.
struct CreateStatusCheckVisitor;

impl<'de> Visitor<'de> for CreateStatusCheckVisitor {
    type Value = CreateStatusCheckRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with a string `client_name` field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut client_name: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == "client_name" {
                if client_name.is_some() {
                    return Err(de::Error::duplicate_field("client_name"));
                }
                client_name = Some(map.next_value()?);
            } else {
                // 모르는 필드는 값을 읽어서 버립니다
                map.next_value::<de::IgnoredAny>()?;
            }
        }

        let client_name = client_name.ok_or_else(|| de::Error::missing_field("client_name"))?;
        Ok(CreateStatusCheckRequest { client_name })
    }
}
