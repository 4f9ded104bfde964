//! # 사용자 관리 서비스
//!
//! 가입, 로그인, 조회, 수정, 소프트 삭제, 비밀번호 변경의 비즈니스 규칙을 담당합니다.
//! 저장소는 [`UserStore`] trait 객체로 주입받으므로 MongoDB 없이도 테스트할 수 있습니다.
//!
//! ## 보안 규칙
//!
//! - 이메일은 정규형(앞뒤 공백 제거 + 소문자)으로만 저장/조회합니다.
//! - 로그인 실패는 원인과 무관하게 같은 메시지를 돌려줍니다.
//!   구체적인 원인은 debug 로그에만 남깁니다.
//! - 비밀번호와 해시는 로그에 남기지 않습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::config::AdminSeedConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{
    ChangePasswordRequest, ListUsersQuery, LoginRequest, RegisterRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::{Pagination, UserListResponse, UserResponse};
use crate::domain::entities::users::user::{Role, User};
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::users::{UserFilter, UserPatch, UserStore};
use crate::services::auth::{role_gate, PasswordService};
use crate::utils::string_utils::normalize_email;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// 사용자 관리 비즈니스 로직 서비스
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    passwords: PasswordService,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, passwords: PasswordService) -> Self {
        Self { store, passwords }
    }

    pub fn store(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.store)
    }

    /// 새 계정을 만듭니다. 역할은 항상 `user`입니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이메일이 이미 사용 중 (비활성 계정 포함)
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let email = normalize_email(&request.email);
        let name = request.name.trim().to_string();

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("User with this email already exists".to_string()));
        }

        let password_hash = self.passwords.hash_blocking(request.password).await?;
        let user = self.store.create(User::new(email, name, password_hash)).await?;

        log::info!("New user registered: {}", user.email);
        Ok(user)
    }

    /// 이메일/비밀번호로 활성 사용자를 확인합니다.
    ///
    /// 없는 이메일, 비활성 계정, 틀린 비밀번호 모두 같은 401입니다.
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<User> {
        let email = normalize_email(&request.email);

        let Some(user) = self.store.find_active_by_email(&email).await? else {
            log::debug!("로그인 실패: 활성 사용자 없음 ({})", email);
            // 존재하는 계정의 비밀번호 검증과 같은 비용을 치릅니다.
            self.passwords.burn_verify_cost(request.password).await?;
            return Err(invalid_credentials());
        };

        let is_valid = self
            .passwords
            .verify_blocking(request.password, user.password_hash.clone())
            .await?;

        if !is_valid {
            log::debug!("로그인 실패: 비밀번호 불일치 ({})", email);
            return Err(invalid_credentials());
        }

        log::info!("User logged in: {}", user.email);
        Ok(user)
    }

    pub async fn get_active(&self, id: &ObjectId) -> AppResult<User> {
        self.store.find_active_by_id(id).await?.ok_or_else(user_not_found)
    }

    /// 활성 사용자 목록 (최신순, 페이지네이션)
    pub async fn list(&self, query: &ListUsersQuery) -> AppResult<UserListResponse> {
        let page = query.page();
        let limit = query.limit();

        let filter = UserFilter {
            search: query.search.clone(),
            skip: (page - 1).saturating_mul(limit),
            limit,
        };

        let (users, total) = self.store.list_active(filter).await?;

        Ok(UserListResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// 사용자 정보를 수정합니다.
    ///
    /// 판단 순서: 대상 존재(404) → 본인/관리자(403) → 역할 변경 권한(403) → 이메일 중복(409)
    pub async fn update(
        &self,
        caller: &AuthenticatedUser,
        target_id: &ObjectId,
        request: UpdateUserRequest,
    ) -> AppResult<User> {
        let target = self.get_active(target_id).await?;

        if !role_gate::can_modify(caller, target_id) {
            return Err(AppError::AuthorizationError("Access denied".to_string()));
        }

        if let Some(role) = request.role {
            if role != target.role && !role_gate::can_change_role(caller) {
                return Err(AppError::AuthorizationError(
                    "Access denied. Cannot change role".to_string(),
                ));
            }
        }

        let email = request.email.as_deref().map(normalize_email);
        if let Some(email) = &email {
            if email != &target.email && self.store.email_taken_by_other(email, target_id).await? {
                return Err(AppError::ConflictError("Email is already taken".to_string()));
            }
        }

        let patch = UserPatch {
            name: request.name,
            email,
            role: request.role.filter(|_| role_gate::can_change_role(caller)),
            password_hash: None,
        };

        if patch.is_empty() {
            return Ok(target);
        }

        let updated = self
            .store
            .update_fields(target_id, patch)
            .await?
            .ok_or_else(user_not_found)?;

        log::info!("User updated: {} by {}", updated.email, caller.email);
        Ok(updated)
    }

    /// 사용자를 소프트 삭제합니다.
    ///
    /// 자기 자신 삭제는 역할과 무관하게 먼저 거부됩니다(400).
    pub async fn delete(&self, caller: &AuthenticatedUser, target_id: &ObjectId) -> AppResult<()> {
        if caller.is_self(target_id) {
            return Err(AppError::ValidationError("Cannot delete your own account".to_string()));
        }

        role_gate::require_role(caller, &[Role::Admin])?;

        if !self.store.soft_delete(target_id).await? {
            return Err(user_not_found());
        }

        log::info!("User deleted: {} by {}", target_id, caller.email);
        Ok(())
    }

    /// 현재 비밀번호를 다시 확인한 뒤 새 비밀번호로 교체합니다.
    pub async fn change_password(
        &self,
        caller: &AuthenticatedUser,
        request: ChangePasswordRequest,
    ) -> AppResult<()> {
        let user = self.get_active(&caller.id).await?;

        let is_valid = self
            .passwords
            .verify_blocking(request.current_password, user.password_hash)
            .await?;
        if !is_valid {
            return Err(AppError::ValidationError("Current password is incorrect".to_string()));
        }

        let password_hash = self.passwords.hash_blocking(request.new_password).await?;
        let patch = UserPatch {
            password_hash: Some(password_hash),
            ..Default::default()
        };

        self.store
            .update_fields(&caller.id, patch)
            .await?
            .ok_or_else(user_not_found)?;

        log::info!("Password changed for user: {}", user.email);
        Ok(())
    }

    /// 설정된 이메일의 계정이 없으면 관리자 계정을 만듭니다.
    ///
    /// 새로 만들었으면 `true`를 반환합니다.
    pub async fn seed_admin(&self, seed: &AdminSeedConfig) -> AppResult<bool> {
        let email = normalize_email(&seed.email);

        if self.store.find_by_email(&email).await?.is_some() {
            log::debug!("관리자 계정이 이미 존재합니다: {}", email);
            return Ok(false);
        }

        let password_hash = self.passwords.hash_blocking(seed.password.clone()).await?;
        let admin = User::new_admin(email, seed.name.trim().to_string(), password_hash);
        let admin = self.store.create(admin).await?;

        log::info!("Admin account created: {}", admin.email);
        Ok(true)
    }
}
