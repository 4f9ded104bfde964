//! 사용자 데이터 액세스 계층
//!
//! - [`UserStore`] - 저장소 계약 (async trait)
//! - [`UserRepository`](user_repo::UserRepository) - MongoDB `users` 컬렉션 구현
//! - `memory_repo` - 테스트 전용 메모리 구현
//!
//! 이메일은 항상 정규형(소문자)으로 전달된다고 가정합니다.
//! 정규화는 서비스 계층의 책임입니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::{Role, User};

pub mod user_repo;
#[cfg(test)]
pub mod memory_repo;

pub use user_repo::UserRepository;

/// 부분 수정 내용. `None` 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.password_hash.is_none()
    }
}

/// 활성 사용자 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// 이름 또는 이메일에 대한 대소문자 무시 부분 일치
    pub search: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

/// 사용자 저장소 계약
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 `_id`가 채워진 레코드를 반환합니다.
    ///
    /// 이메일이 이미 존재하면(비활성 포함) `ConflictError`입니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 상태와 무관하게 이메일로 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_active_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// `exclude_id` 외의 레코드(비활성 포함)가 이 이메일을 쓰고 있는지 확인합니다.
    async fn email_taken_by_other(&self, email: &str, exclude_id: &ObjectId) -> AppResult<bool>;

    /// 활성 레코드에 패치를 원자적으로 적용하고 변경 후 레코드를 반환합니다.
    /// `updated_at`을 갱신합니다.
    async fn update_fields(&self, id: &ObjectId, patch: UserPatch) -> AppResult<Option<User>>;

    /// 활성 레코드를 비활성화합니다. 대상이 없으면 `false`.
    async fn soft_delete(&self, id: &ObjectId) -> AppResult<bool>;

    /// 최신순 활성 사용자 한 페이지와 조건에 맞는 전체 개수
    async fn list_active(&self, filter: UserFilter) -> AppResult<(Vec<User>, u64)>;

    async fn create_indexes(&self) -> AppResult<()>;
}
