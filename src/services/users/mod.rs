//! 사용자 관리 서비스 모듈
//!
//! 가입, 로그인, 조회, 수정, 삭제, 비밀번호 변경의 비즈니스 로직을 제공합니다.
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store, PasswordService::new(12));
//! let user = service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
