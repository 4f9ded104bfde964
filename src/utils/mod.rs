//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 정리, 이메일 정규화, 검색어 이스케이프, 기간 파싱
//! - [`display_terminal`] - 기동 로그 포맷팅

pub mod string_utils;
pub mod display_terminal;
