//! 성공 응답 봉투
//!
//! 모든 2xx 응답은 `{ "success": true, "message"?: ..., "data"?: ... }` 형태입니다.
//! 실패 응답 봉투는 [`AppError`](crate::core::errors::AppError)가 만듭니다.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 데이터 없이 메시지만 담은 응답
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::message("User deleted successfully")).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_data_envelope_omits_message() {
        let json = serde_json::to_value(ApiResponse::data(vec![1, 2])).unwrap();

        assert!(json.get("message").is_none());
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }
}
