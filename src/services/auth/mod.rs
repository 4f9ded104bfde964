//! 인증 및 보안 서비스 모듈
//!
//! - [`token_service`] - HS256 JWT 발급/검증
//! - [`password_service`] - bcrypt 해시/검증 (블로킹 풀 사용)
//! - [`guard`] - Bearer 토큰 → 활성 사용자 확인
//! - [`role_gate`] - 역할/소유권 판단
//!
//! ```rust,ignore
//! use crate::services::auth::{guard, role_gate, TokenService};
//!
//! let resolved = guard::resolve_identity(header, &tokens, store.as_ref()).await?;
//! role_gate::require_role(&resolved.identity, &[Role::Admin])?;
//! ```

pub mod token_service;
pub mod password_service;
pub mod guard;
pub mod role_gate;

pub use token_service::TokenService;
pub use password_service::PasswordService;
