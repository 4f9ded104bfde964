//! Users Entity Module
//!
//! 사용자 문서와 역할 enum을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{Role, User};
//!
//! let user = User::new(email, name, password_hash);
//! assert_eq!(user.role, Role::User);
//! ```

pub mod user;

pub use user::{Role, User};
