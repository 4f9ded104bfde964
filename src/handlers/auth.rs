//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회 엔드포인트입니다.
//!
//! - `POST /api/auth/register` - 계정 생성 후 토큰 발급 (201)
//! - `POST /api/auth/login` - 이메일/비밀번호 로그인 (200)
//! - `GET /api/auth/me` - 토큰 소유자의 프로필 (200)

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{ApiResponse, AuthResponse, UserEnvelope};
use crate::domain::models::auth::CurrentUser;
use crate::middlewares::AuthMiddleware;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
///
/// # Errors
/// * 400 - 필드 검증 실패 (`errors` 배열 포함)
/// * 409 - 이미 사용 중인 이메일
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.user_service.register(payload.into_inner()).await?;
    let token = state.token_service.issue(&user)?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        "User registered successfully",
        AuthResponse::new(token, user),
    )))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.user_service.authenticate(payload.into_inner()).await?;
    let token = state.token_service.issue(&user)?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        "Login successful",
        AuthResponse::new(token, user),
    )))
}

#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(current: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::data(UserEnvelope::from(current.into_inner()))))
}
