//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 검증과 활성 계정 확인 ([`guard`](crate::services::auth::guard))
//! - 선택적 역할 제한 ([`role_gate`](crate::services::auth::role_gate))
//! - 확인된 `AuthenticatedUser`/`CurrentUser`를 request extension에 저장
//! - 실패 시 `AppError` 봉투로 즉시 응답
//!
//! ```rust,ignore
//! #[get("/me", wrap = "AuthMiddleware::required()")]
//! pub async fn me(current: CurrentUser) -> Result<HttpResponse, AppError> { ... }
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
