//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 연결하는 얇은 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - Access Guard / Role Gate
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 검증, 응답 봉투          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 규칙                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore                      ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! 성공 응답은 `ApiResponse` 봉투로, 실패는 `AppError::error_response()`로
//! 직렬화됩니다. 의존성은 `web::Data<AppState>`와 인증 추출자로 받습니다.

pub mod auth;
pub mod users;
