//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 명시적으로 생성되어 [`AppState`](crate::core::AppState)에 담기고,
//! 핸들러는 `web::Data<AppState>`를 통해 접근합니다.
//!
//! - [`users`] - 사용자 생명주기
//! - [`auth`] - 토큰, 비밀번호, 접근 가드, 역할 판단

pub mod users;
pub mod auth;
