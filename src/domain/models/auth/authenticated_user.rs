//! 요청 단위 인증 컨텍스트
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰 검증 후
//! Request Extensions에 넣어 두고, 핸들러는 인자로 추출해 사용합니다.

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::{Role, User};

/// 토큰과 현재 저장된 레코드로 확인된 호출자 정보
///
/// 역할은 토큰 클레임이 아니라 저장된 레코드에서 가져오므로
/// 역할 변경이 즉시 반영됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    pub id: ObjectId,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// 대상 ID가 호출자 자신인지 확인
    pub fn is_self(&self, target: &ObjectId) -> bool {
        &self.id == target
    }
}

impl TryFrom<&User> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("stored user without _id".to_string()))?;

        Ok(Self {
            id,
            email: user.email.clone(),
            role: user.role,
        })
    }
}

fn unauthenticated() -> AppError {
    AppError::AuthenticationError("Access denied. No token provided.".to_string())
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(unauthenticated())),
        }
    }
}

/// 인증된 호출자의 저장 레코드 전체 (프로필 조회용)
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(unauthenticated())),
        }
    }
}
