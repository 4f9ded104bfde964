//! 요청의 Bearer 토큰을 호출자 정보로 변환합니다.
//!
//! 1. `Bearer ` 스킴 확인
//! 2. 서명/만료 검증
//! 3. 토큰의 `id`로 **활성** 레코드 조회
//!
//! 어느 단계에서 실패해도 외부 메시지는 같습니다. 저장소 자체의 장애만
//! 그대로 전파되어 500이 됩니다.

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::users::UserStore;
use crate::services::auth::token_service::{invalid_token, TokenService};

/// 가드 통과 결과
#[derive(Debug, Clone)]
pub struct ResolvedIdentity {
    pub identity: AuthenticatedUser,
    pub user: User,
}

pub async fn resolve_identity(
    auth_header: Option<&str>,
    tokens: &TokenService,
    store: &dyn UserStore,
) -> AppResult<ResolvedIdentity> {
    let header = auth_header.ok_or_else(|| {
        log::debug!("Authorization 헤더 없음");
        invalid_token()
    })?;

    let token = tokens.extract_bearer_token(header)?;
    let claims = tokens.verify(token)?;

    let id = ObjectId::parse_str(&claims.id).map_err(|_| {
        log::debug!("토큰의 사용자 ID 형식 오류: {}", claims.id);
        invalid_token()
    })?;

    let user = store.find_active_by_id(&id).await?.ok_or_else(|| {
        log::debug!("토큰 사용자 없음 또는 비활성: {}", id);
        invalid_token()
    })?;

    let identity = AuthenticatedUser::try_from(&user)?;

    Ok(ResolvedIdentity { identity, user })
}
