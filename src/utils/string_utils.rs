//! # 문자열 유틸리티
//!
//! 요청 값 정리, 이메일 정규화, 검색어 이스케이프, 기간 문자열 파싱 등
//! 문자열 처리와 관련된 공통 함수들입니다.

use chrono::Duration;
use serde::Deserialize;

/// 이메일을 저장/조회용 정규형으로 만듭니다 (앞뒤 공백 제거 + 소문자).
///
/// 이메일 유니크 제약은 이 정규형 기준으로 대소문자를 구분하지 않습니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 빈 문자열/공백 문자열을 `None`으로 역직렬화합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 정규식 메타 문자를 이스케이프하여 부분 문자열 검색어로 사용합니다.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `30s`, `15m`, `12h`, `7d` 또는 초 단위 숫자를 기간으로 변환합니다.
///
/// 0 이하의 값이나 알 수 없는 단위는 `None`입니다.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (digits, unit) = match raw.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((idx, _)) => raw.split_at(idx),
        None => (raw, "s"),
    };

    let amount: i64 = digits.parse().ok().filter(|n| *n > 0)?;

    match unit.trim() {
        "s" => Some(Duration::seconds(amount)),
        "m" => Some(Duration::minutes(amount)),
        "h" => Some(Duration::hours(amount)),
        "d" => Some(Duration::days(amount)),
        _ => None,
    }
}
