//! # Domain Models Module
//!
//! 영속성이 없는 도메인 모델입니다.
//!
//! - [`auth`] - 요청마다 확인되는 호출자 정보 (`AuthenticatedUser`, `CurrentUser`)
//! - [`token`] - JWT 클레임
//!
//! 엔티티(`../entities/`)와 달리 데이터베이스에 저장되지 않으며,
//! 요청 처리 중에만 존재합니다.

pub mod auth;
pub mod token;
