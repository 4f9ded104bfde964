//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 핸들러/미들웨어 실패는 `AppError`로 전파되고, 단일 경계인
//! `ResponseError::error_response()`에서 HTTP 상태 코드와 JSON 봉투로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ID, 자기 자신 삭제, 현재 비밀번호 불일치 |
//! | `InvalidInput` | 400 Bad Request | 요청 바디 필드 검증 실패 (필드별 상세 포함) |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 검증 실패 |
//! | `AuthorizationError` | 403 Forbidden | 역할 부족, 타인 정보 수정 |
//! | `NotFound` | 404 Not Found | 활성 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ConfigurationError` | 500 Internal Server Error | 설정 누락 (주로 기동 시점) |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Validation failed",
//!   "errors": [{ "field": "email", "message": "Please provide a valid email" }]
//! }
//! ```
//!
//! 5xx 응답의 메시지는 개발 환경이 아니면 `"Internal server error"`로 대체됩니다.

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::Environment;

/// 필드 단위 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 단일 메시지 입력값 에러 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 요청 바디 필드 검증 실패 (400)
    #[error("Validation failed")]
    InvalidInput(Vec<FieldError>),

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 중복 데이터 (409)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    ///
    /// 메시지는 원인을 구분하지 않는 고정 문구만 사용합니다.
    #[error("{0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("{0}")]
    AuthorizationError(String),

    /// 설정 오류 (500). JWT 시크릿 누락 등 기동 시점에 치명적으로 처리됩니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투에 들어갈 클라이언트용 메시지
    ///
    /// 5xx 계열은 개발 환경에서만 원본 메시지를 노출합니다.
    pub fn client_message(&self, expose_internal: bool) -> String {
        if self.is_server_error() && !expose_internal {
            return "Internal server error".to_string();
        }
        self.to_string()
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_) | AppError::ConfigurationError(_) | AppError::InternalError(_)
        )
    }

    fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            AppError::InvalidInput(errors) => Some(errors),
            _ => None,
        }
    }

    /// 환경 설정에 따라 JSON 봉투를 생성합니다.
    pub fn to_body(&self, expose_internal: bool) -> serde_json::Value {
        let mut body = serde_json::json!({
            "success": false,
            "message": self.client_message(expose_internal),
        });

        if let Some(errors) = self.field_errors() {
            body["errors"] = serde_json::json!(errors);
        }

        body
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx는 서버 로그에 상세 원인을 남기고, 클라이언트에는 환경에 따라
    /// 일반화된 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {} {}", status.as_u16(), self);
        } else {
            log::debug!("요청 실패 {}: {}", status.as_u16(), self);
        }

        let expose_internal = Environment::current().is_development();

        actix_web::HttpResponse::build(status).json(self.to_body(expose_internal))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::InternalError(format!("blocking task failed: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// 필드별 에러를 평탄화합니다. 필드 이름 순으로 정렬해 응답 순서를 고정합니다.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::InvalidInput(fields)
    }
}
