//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 매핑되는 영속성 엔티티입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (users 컬렉션 문서)
//! ├── models/       ← 인증 컨텍스트, 토큰 클레임
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티는 `serde`를 통해 BSON으로 직렬화되며, `_id`는 `Option<ObjectId>`로
//! 매핑되어 삽입 전에는 비어 있습니다.

pub mod users;
