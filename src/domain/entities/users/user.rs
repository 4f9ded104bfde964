//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 비밀번호 해시를 포함하므로 API 응답으로는 직접 직렬화하지 않고
//! 반드시 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 저장/토큰/응답 모두 소문자 문자열(`"user"`, `"admin"`)로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 정규화된 이메일 (소문자, unique)
    pub email: String,
    /// 표시 이름 (앞뒤 공백 제거, 2-50자)
    pub name: String,
    /// bcrypt 해시
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
    /// `false`면 소프트 삭제된 계정
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 활성 사용자를 생성합니다. 역할은 항상 `user`로 시작합니다.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            name,
            password_hash,
            role: Role::User,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 관리자 계정 생성 (기동 시 부트스트랩 전용)
    pub fn new_admin(email: String, name: String, password_hash: String) -> Self {
        Self {
            role: Role::Admin,
            ..Self::new(email, name, password_hash)
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
