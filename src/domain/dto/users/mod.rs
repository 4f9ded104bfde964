//! Users DTO Module
//!
//! 사용자/인증 API의 요청 및 응답 데이터 전송 객체입니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
