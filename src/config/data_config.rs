//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 레이트 리밋, CORS 및 비밀번호 해싱 설정을 관리합니다.
//! 각 설정은 기동 시 한 번 `from_env()`로 만들어져 명시적으로 전달됩니다.
//! 테스트에서는 `from_source()`에 조회 함수를 넘겨 환경 변수 없이 구성합니다.

use std::env;
use std::time::Duration;

/// 환경 변수 조회 함수 타입
///
/// `from_env()`는 `std::env::var`를, 테스트는 고정된 맵을 사용합니다.
pub trait ConfigSource: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> ConfigSource for F {}

pub(crate) fn process_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: std::str::FromStr>(source: &impl ConfigSource, key: &str, default: T) -> T {
    match source(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패 ('{}'), 기본값 사용", key, raw);
            default
        }),
        None => default,
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 내부 에러 메시지 노출, 낮은 bcrypt cost
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(&process_env, &Environment::current())
    }

    pub fn bcrypt_cost_from(source: &impl ConfigSource, env: &Environment) -> u32 {
        source("BCRYPT_COST")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12 (검증 1회에 수십 ms)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(&process_env)
    }

    /// `HOST`(기본 0.0.0.0), `PORT`(기본 8080), `WORKERS`(기본 4)
    pub fn from_source(source: &impl ConfigSource) -> Self {
        Self {
            host: source("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(source, "PORT", 8080),
            workers: parse_or(source, "WORKERS", 4usize).max(1),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    pub max_pool_size: u32,
    pub server_selection_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_source(&process_env)
    }

    /// `MONGODB_URI`, `DATABASE_NAME`, `MONGODB_MAX_POOL_SIZE`,
    /// `MONGODB_SERVER_SELECTION_TIMEOUT_MS`
    pub fn from_source(source: &impl ConfigSource) -> Self {
        Self {
            uri: source("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: source("DATABASE_NAME").unwrap_or_else(|| "credential_gate".to_string()),
            max_pool_size: parse_or(source, "MONGODB_MAX_POOL_SIZE", 10),
            server_selection_timeout: Duration::from_millis(parse_or(
                source,
                "MONGODB_SERVER_SELECTION_TIMEOUT_MS",
                5000,
            )),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self::from_source(&process_env)
    }

    /// `RATE_LIMIT_PER_SECOND`(기본 100), `RATE_LIMIT_BURST_SIZE`(기본 200)
    pub fn from_source(source: &impl ConfigSource) -> Self {
        Self {
            per_second: parse_or(source, "RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: parse_or(source, "RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        }
    }
}

/// CORS 설정
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// 비어 있으면 모든 Origin 허용
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_source(&process_env)
    }

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let allowed_origins = source("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { allowed_origins }
    }
}
