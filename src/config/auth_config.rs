//! # Authentication Configuration Module
//!
//! JWT 서명 및 초기 관리자 계정 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"   # 필수
//! export JWT_EXPIRES_IN="7d"                      # 선택: 30s / 15m / 12h / 7d / 초 단위 숫자
//!
//! # 선택: 첫 관리자 계정 부트스트랩
//! export ADMIN_EMAIL="admin@example.com"
//! export ADMIN_PASSWORD="ChangeMe123"
//! export ADMIN_NAME="Administrator"
//! ```
//!
//! `JWT_SECRET`이 없으면 요청 단위 에러가 아니라 기동 실패로 처리합니다.

use chrono::Duration;

use crate::config::data_config::{process_env, ConfigSource};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::parse_duration;

/// 기본 토큰 유효 기간 (7일)
pub const DEFAULT_TOKEN_TTL: &str = "7d";

/// JWT 서명 설정
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(&process_env)
    }

    pub fn from_source(source: &impl ConfigSource) -> AppResult<Self> {
        let secret = source("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError("JWT_SECRET is not defined in environment variables".to_string())
            })?;

        let raw_ttl = source("JWT_EXPIRES_IN").unwrap_or_else(|| DEFAULT_TOKEN_TTL.to_string());
        let expires_in = parse_duration(&raw_ttl).ok_or_else(|| {
            AppError::ConfigurationError(format!("JWT_EXPIRES_IN has an invalid value: {}", raw_ttl))
        })?;

        Ok(Self { secret, expires_in })
    }
}

/// 첫 관리자 계정 부트스트랩 설정
///
/// API로는 관리자를 만들 수 없으므로, 세 값이 모두 있으면 기동 시 계정을 생성합니다.
#[derive(Clone)]
pub struct AdminSeedConfig {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl AdminSeedConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_source(&process_env)
    }

    pub fn from_source(source: &impl ConfigSource) -> Option<Self> {
        Some(Self {
            email: source("ADMIN_EMAIL")?,
            password: source("ADMIN_PASSWORD")?,
            name: source("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
        })
    }
}
