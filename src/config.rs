//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: 데이터베이스 연결 문자열 (기본값: 로컬 SQLite 파일)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 최대 크기
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//!
//! 모든 항목에 기본값이 있으므로 환경변수가 하나도 없어도 서버가 뜹니다.

use std::env; // 표준 라이브러리의 환경변수 모듈

/// `DATABASE_URL`이 없을 때 사용하는 로컬 기본 연결 문자열
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/status_checks.db";

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서만 사용됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 데이터베이스 연결 문자열 (예: "sqlite:data/status_checks.db")
    pub database_url: String,
    /// 연결 풀이 동시에 유지할 최대 연결 수
    pub max_connections: u32,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8001)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 항목이 없으므로 실패하지 않습니다.
    /// 숫자 파싱에 실패한 값은 조용히 기본값으로 대체됩니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다.
    ///
    /// 실제 환경변수 대신 클로저를 받기 때문에,
    /// 테스트에서 프로세스 전역 환경을 건드리지 않고 검증할 수 있습니다.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            // .and_then(): Some일 때만 파싱을 시도하고, 실패하면 None
            // 0은 연결을 하나도 내줄 수 없는 풀이 되므로 파싱 실패와 똑같이 취급합니다.
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(5),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8001),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr(), "0.0.0.0:8001");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 8001);
    }

    #[test]
    fn zero_pool_size_falls_back_to_default() {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_MAX_CONNECTIONS" => Some("0".to_string()),
            _ => None,
        });

        assert_eq!(config.max_connections, 5);
    }
}
