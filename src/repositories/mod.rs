//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 타입 대신 [`UserStore`](users::UserStore) trait 객체에 의존합니다.
//! 운영에서는 MongoDB 구현([`UserRepository`](users::UserRepository))을,
//! 테스트에서는 메모리 구현을 주입합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! store.create_indexes().await?;
//! let user = store.find_active_by_email("user@example.com").await?;
//! ```

pub mod users;
