//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! - [`errors`] - `AppError` / `AppResult` 및 HTTP 에러 응답 변환
//! - [`state`] - 기동 시 한 번 구성되어 모든 워커에 전달되는 `AppState`
//!
//! 프로세스 전역 싱글톤 대신, `main`에서 명시적으로 만든 핸들을
//! `web::Data<AppState>`로 내려보내는 구조입니다.

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::AppState;
