//! User Management HTTP Handlers
//!
//! `/api/users` 스코프의 엔드포인트입니다. 모든 라우트는 인증이 필요합니다.
//!
//! | Method | Path | 권한 |
//! |--------|------|------|
//! | GET | `/api/users` | admin |
//! | PUT | `/api/users/change-password` | 본인 |
//! | GET | `/api/users/{id}` | 인증된 사용자 |
//! | PUT | `/api/users/{id}` | 본인 또는 admin |
//! | DELETE | `/api/users/{id}` | admin (자기 자신 제외) |
//!
//! `change-password`는 `/{id}`보다 먼저 등록되어야 합니다.
//! DELETE는 자기 자신 삭제(400)를 역할 판단보다 먼저 검사하므로
//! 미들웨어에서는 인증만 요구하고 관리자 확인은 서비스에서 합니다.

use actix_web::{delete, get, put, web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::{AppError, AppResult, AppState};
use crate::domain::dto::users::request::{ChangePasswordRequest, ListUsersQuery, UpdateUserRequest};
use crate::domain::dto::users::response::{ApiResponse, UserEnvelope};
use crate::domain::entities::users::user::Role;
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;

/// 경로의 사용자 ID를 ObjectId로 변환합니다. 형식이 잘못되면 400입니다.
fn parse_user_id(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| AppError::ValidationError("Invalid user ID format".to_string()))
}

/// 활성 사용자 목록 (관리자 전용)
///
/// # Endpoint
/// `GET /api/users?page=1&limit=10&search=alice`
#[get("", wrap = "AuthMiddleware::required_with_roles(&[Role::Admin])")]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.user_service.list(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::data(page)))
}

#[put("/change-password", wrap = "AuthMiddleware::required()")]
pub async fn change_password(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    state.user_service.change_password(&caller, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Password changed successfully")))
}

#[get("/{user_id}", wrap = "AuthMiddleware::required()")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;
    let user = state.user_service.get_active(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(UserEnvelope::from(user))))
}

/// 사용자 정보 수정
///
/// 전달된 필드(`name`, `email`, `role`)만 변경합니다.
#[put("/{user_id}", wrap = "AuthMiddleware::required()")]
pub async fn update_user(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;
    payload.validate()?;

    let updated = state.user_service.update(&caller, &id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        "User updated successfully",
        UserEnvelope::from(updated),
    )))
}

#[delete("/{user_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_user(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;
    state.user_service.delete(&caller, &id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        let id = ObjectId::new();
        assert_eq!(parse_user_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_user_id("not-an-id"), Err(AppError::ValidationError(_))));
    }
}
