//! 역할 기반 접근 제어
//!
//! 미들웨어와 핸들러가 같은 판단 함수를 사용합니다.
//! 호출자 정보가 없는 경우는 여기까지 오지 않습니다 (가드에서 401).

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::Role;
use crate::domain::models::auth::AuthenticatedUser;

/// 호출자의 역할이 허용 목록에 있는지 확인합니다.
pub fn require_role(identity: &AuthenticatedUser, allowed: &[Role]) -> AppResult<()> {
    if allowed.contains(&identity.role) {
        return Ok(());
    }

    log::warn!(
        "권한 부족: 사용자 {} ({}), 필요 권한: {:?}",
        identity.id,
        identity.role,
        allowed
    );
    Err(AppError::AuthorizationError(
        "Access denied. Insufficient permissions.".to_string(),
    ))
}

/// 본인 또는 관리자만 대상 레코드를 수정할 수 있습니다.
pub fn can_modify(identity: &AuthenticatedUser, target_id: &ObjectId) -> bool {
    identity.is_self(target_id) || identity.is_admin()
}

/// 역할 변경은 관리자만 가능합니다.
pub fn can_change_role(identity: &AuthenticatedUser) -> bool {
    identity.is_admin()
}
