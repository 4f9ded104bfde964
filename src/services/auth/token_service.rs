//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 토큰의 발급과 검증을 담당합니다.
//! 서명 키는 기동 시 [`JwtConfig`]에서 한 번 만들어지고 모든 워커가 공유합니다.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenClaims;

/// 토큰 검증 실패 시 외부로 나가는 유일한 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// JWT 토큰 관리 서비스
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expires_in: chrono::Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(config.secret.as_bytes()),
                decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            }),
            expires_in: config.expires_in,
        }
    }

    /// 토큰 유효 기간 (초)
    pub fn expires_in_secs(&self) -> i64 {
        self.expires_in.num_seconds()
    }

    /// 사용자를 위한 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은 사용자(`_id` 없음) 또는 서명 실패
    pub fn issue(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + self.expires_in;

        let claims = TokenClaims {
            id: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("cannot issue token for unsaved user".to_string()))?,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .context("JWT 토큰 생성 실패")
    }

    /// 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// 실패 원인은 debug 로그에만 남고, 호출자에게는 항상 같은 401 메시지가 갑니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.keys.decoding, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                invalid_token()
            })
    }

    /// `Authorization` 헤더 값에서 `Bearer ` 뒤의 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => {
                log::debug!("Bearer 스킴이 아닌 인증 헤더");
                Err(invalid_token())
            }
        }
    }
}

pub(crate) fn invalid_token() -> AppError {
    AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
}
