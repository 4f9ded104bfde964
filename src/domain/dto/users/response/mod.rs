//! # User Response DTOs
//!
//! API 응답 구조체입니다. 엔티티는 절대 그대로 직렬화하지 않고
//! [`UserResponse`]를 거쳐 비밀번호 해시를 제거합니다.

pub mod api_response;
pub mod user_response;

pub use api_response::ApiResponse;
pub use user_response::{AuthResponse, Pagination, UserEnvelope, UserListResponse, UserResponse};
