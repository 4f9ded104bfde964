//! JWT 클레임 구조체

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::Role;

/// JWT 토큰의 클레임(Payload)
///
/// - `id`: 사용자 ObjectId (hex)
/// - `email`, `role`: 발급 시점의 값 (권한 판단에는 저장된 레코드를 다시 사용)
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (UUID v4). 같은 초에 발급된 토큰도 서로 다릅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}
