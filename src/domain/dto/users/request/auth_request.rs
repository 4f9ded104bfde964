//! 인증 요청 DTO
//!
//! 회원가입과 로그인 요청 바디를 매핑합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidateEmail};

/// 이름 최소/최대 길이 (앞뒤 공백 제거 후, 문자 수 기준)
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

/// 회원가입 요청
///
/// ```json
/// { "email": "alice@example.com", "password": "Secret123", "name": "Alice" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

/// 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 앞뒤 공백을 제거한 값으로 이메일 형식을 검사합니다.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !email.trim().validate_email() {
        return Err(ValidationError::new("email")
            .with_message("Please provide a valid email".into()));
    }
    Ok(())
}

/// 이름은 앞뒤 공백 제거 후 2-50자여야 합니다.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::new("length")
            .with_message("Name must be between 2 and 50 characters".into()));
    }
    Ok(())
}
