//! # User Request DTOs
//!
//! 클라이언트가 보내는 요청 바디/쿼리 구조체입니다.
//! 모든 바디 DTO는 `validator::Validate`를 구현하며, 핸들러에서 `validate()?`로
//! 검사하면 `AppError::InvalidInput`으로 변환되어 필드별 에러가 응답됩니다.
//!
//! - [`auth_request`] - 회원가입, 로그인
//! - [`user_request`] - 사용자 수정, 비밀번호 변경, 목록 쿼리

pub mod auth_request;
pub mod user_request;

pub use auth_request::{LoginRequest, RegisterRequest};
pub use user_request::{ChangePasswordRequest, ListUsersQuery, UpdateUserRequest, MAX_PAGE};
