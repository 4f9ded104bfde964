//! 사용자 응답 DTO
//!
//! 엔티티에서 비밀번호 해시를 제거하고 API용 camelCase JSON으로 변환합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{Role, User};

/// 사용자 응답 DTO
///
/// ```json
/// {
///   "id": "665f1c...",
///   "email": "alice@example.com",
///   "name": "Alice",
///   "role": "user",
///   "isActive": true,
///   "createdAt": "2024-06-04T10:00:00Z",
///   "updatedAt": "2024-06-04T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn rfc3339(value: DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.timestamp_millis().to_string())
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            role,
            is_active,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            role,
            is_active,
            created_at: rfc3339(created_at),
            updated_at: rfc3339(updated_at),
        }
    }
}

/// 회원가입/로그인 응답 (`data` 필드)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user: UserResponse::from(user),
        }
    }
}

/// 프로필/단건 조회 응답 (`data` 필드)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

/// 페이지네이션 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub pages: u64,
    pub total: u64,
    pub limit: u64,
}

impl Pagination {
    /// `pages = ceil(total / limit)`
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let limit = limit.max(1);
        Self {
            page,
            pages: total.div_ceil(limit),
            total,
            limit,
        }
    }
}

/// 사용자 목록 응답 (`data` 필드)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_contains_password() {
        let user = User::new("a@b.co".into(), "Alice".into(), "$2b$04$secret-hash".into());
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("passwordHash"));
        assert!(!json.to_string().contains("secret-hash"));
        assert_eq!(json["isActive"], true);
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_timestamps_are_rfc3339() {
        let mut user = User::new("a@b.co".into(), "Alice".into(), "hash".into());
        user.created_at = DateTime::from_millis(0);

        let response = UserResponse::from(user);
        assert_eq!(response.created_at, "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_pagination_rounds_pages_up() {
        assert_eq!(Pagination::new(1, 10, 0).pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).pages, 1);
        assert_eq!(Pagination::new(2, 10, 11).pages, 2);
        assert_eq!(Pagination::new(1, 100, 250).pages, 3);
    }
}
