//! # Domain Layer Module
//!
//! 도메인 계층: 저장되는 엔티티, HTTP 경계의 DTO, 요청 단위 모델.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities     - users 컬렉션 문서 (User, Role)
//! ├── dto          - 요청/응답 데이터 전송 객체
//! └── models       - 인증 컨텍스트, JWT 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 도메인 타입은 하위 계층(서비스, 저장소)에 의존하지 않습니다.
//! 예외는 `AppError`뿐이며, 추출자(`FromRequest`) 실패를 표현하는 데 사용됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{Role, User};
pub use dto::users::request::{
    ChangePasswordRequest, ListUsersQuery, LoginRequest, RegisterRequest, UpdateUserRequest,
};
pub use dto::users::response::{
    ApiResponse, AuthResponse, Pagination, UserEnvelope, UserListResponse, UserResponse,
};
pub use models::auth::{AuthenticatedUser, CurrentUser};
pub use models::token::TokenClaims;

#[cfg(test)]
mod tests {
    use super::{Pagination, Role, User, UserResponse};

    #[test]
    fn test_flat_reexports_point_at_domain_types() {
        let user = User::new("a@b.co".into(), "Alice".into(), "hash".into());
        let response = UserResponse::from(user);

        assert_eq!(response.role, Role::User);
        assert_eq!(Pagination::new(1, 10, 0).pages, 0);
    }
}
