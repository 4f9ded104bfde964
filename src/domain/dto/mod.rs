//! # Data Transfer Objects Module
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체입니다.
//!
//! ```text
//! Client ──JSON──▶ Request DTO ──validate()──▶ Service ──▶ Entity
//!                                                            │
//! Client ◀──JSON── ApiResponse<Response DTO> ◀──From<User>───┘
//! ```
//!
//! 요청 DTO는 `validator`로 필드를 검증하고, 응답 DTO는 `From<User>`로
//! 엔티티에서 민감한 필드를 제거한 뷰를 만듭니다.

pub mod users;

pub use users::*;
