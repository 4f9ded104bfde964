//! 테스트용 메모리 저장소
//!
//! MongoDB 없이 서비스와 HTTP 흐름을 검증하기 위한 [`UserStore`] 구현입니다.
//! 유니크 이메일, 활성 필터, 최신순 정렬을 MongoDB 구현과 같은 규칙으로 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::{UserFilter, UserPatch, UserStore};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 활성 여부와 무관하게 저장된 레코드를 조회합니다.
    pub fn raw_by_email(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.email == email).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn matches_search(user: &User, term: &str) -> bool {
    let term = term.to_lowercase();
    user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("User with this email already exists".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.raw_by_email(email))
    }

    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.raw_by_email(email).filter(|u| u.is_active))
    }

    async fn find_active_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id) && u.is_active).cloned())
    }

    async fn email_taken_by_other(&self, email: &str, exclude_id: &ObjectId) -> AppResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .any(|u| u.email == email && u.id.as_ref() != Some(exclude_id)))
    }

    async fn update_fields(&self, id: &ObjectId, patch: UserPatch) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();

        if let Some(email) = &patch.email {
            if users.iter().any(|u| &u.email == email && u.id.as_ref() != Some(id)) {
                return Err(AppError::ConflictError("User with this email already exists".to_string()));
            }
        }

        let Some(user) = users.iter_mut().find(|u| u.id.as_ref() == Some(id) && u.is_active) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(hash) = patch.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }

    async fn soft_delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id.as_ref() == Some(id) && u.is_active) {
            Some(user) => {
                user.is_active = false;
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_active(&self, filter: UserFilter) -> AppResult<(Vec<User>, u64)> {
        let users = self.users.lock().unwrap();

        let mut matching: Vec<User> = users
            .iter()
            .filter(|u| u.is_active)
            .filter(|u| filter.search.as_deref().is_none_or(|term| matches_search(u, term)))
            .cloned()
            .collect();

        // 삽입 순서가 곧 생성 순서이므로 뒤집어서 최신순으로 만듭니다.
        matching.reverse();

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
