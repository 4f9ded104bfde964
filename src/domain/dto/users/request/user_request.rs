//! 사용자 관리 요청 DTO
//!
//! 수정, 비밀번호 변경 바디와 목록 조회 쿼리를 매핑합니다.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::user::Role;
use crate::utils::string_utils::deserialize_optional_string;

/// 목록 조회 기본값과 상한
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
/// `(page - 1) * limit`가 항상 `i64` 범위에 들어가도록 제한한 최대 페이지
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// 사용자 정보 수정 요청
///
/// 전달된 필드만 변경합니다. `role`은 관리자만 다른 값으로 바꿀 수 있습니다.
/// 문자열 필드는 역직렬화 시 앞뒤 공백이 제거되므로 길이 검사는 정리된 값 기준입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<Role>,
}

/// 비밀번호 변경 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, max = 128, message = "New password must be between 6 and 128 characters"))]
    pub new_password: String,
}

/// 사용자 목록 쿼리 (`?page=&limit=&search=`)
///
/// 숫자가 아닌 값은 에러 대신 기본값으로 처리합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
}

impl ListUsersQuery {
    /// 1 이상의 페이지 번호
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE)
            .min(MAX_PAGE)
    }

    /// 1..=100 범위로 제한된 페이지 크기
    pub fn limit(&self) -> u64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|limit| *limit >= 1)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_page_is_capped_so_skip_fits_i64() {
        let query = ListUsersQuery {
            page: Some("100000000000000000".into()),
            limit: Some("100".into()),
            search: None,
        };

        assert_eq!(query.page(), MAX_PAGE);
        let skip = (query.page() - 1) * query.limit();
        assert!(i64::try_from(skip).is_ok());

        let query = ListUsersQuery {
            page: Some(u64::MAX.to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), MAX_PAGE);
    }

    #[test]
    fn test_update_request_accepts_partial_body() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Bob"));
        assert!(request.email.is_none());
        assert!(request.role.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_unknown_role() {
        let result = serde_json::from_str::<UpdateUserRequest>(r#"{"role": "superuser"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_validates_present_fields() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"email": "nope", "name": "B"}"#).unwrap();
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_change_password_uses_camel_case() {
        let request: ChangePasswordRequest =
            serde_json::from_str(r#"{"currentPassword": "Secret123", "newPassword": "abc"}"#).unwrap();

        assert_eq!(request.current_password, "Secret123");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_query_defaults_and_clamping() {
        let query = ListUsersQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);

        let query = ListUsersQuery {
            page: Some("0".into()),
            limit: Some("500".into()),
            search: None,
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 100);

        let query = ListUsersQuery {
            page: Some("abc".into()),
            limit: Some("0".into()),
            search: None,
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
    }
}
