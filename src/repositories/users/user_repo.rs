//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email: 1` | unique |
//! | `created_at_desc` | `created_at: -1` | 목록 정렬 |
//! | `is_active` | `is_active: 1` | 활성 필터 |
//!
//! ## 동시성
//!
//! 이메일 중복은 사전 조회로 먼저 거르지만, 동시 가입 경합은 유니크 인덱스가
//! 최종적으로 막습니다. 중복 키 에러(11000)는 `ConflictError`로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::users::{UserFilter, UserPatch, UserStore};
use crate::utils::string_utils::escape_regex;

const COLLECTION: &str = "users";
const DUPLICATE_KEY: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION),
        }
    }

    fn email_conflict() -> AppError {
        AppError::ConflictError("User with this email already exists".to_string())
    }

    /// 중복 키 에러는 `ConflictError`로, 나머지는 `DatabaseError`로 변환합니다.
    fn map_write_error(err: mongodb::error::Error) -> AppError {
        if is_duplicate_key(&err) {
            Self::email_conflict()
        } else {
            AppError::from(err)
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// 목록 필터 문서: 활성 사용자 + 이름/이메일 부분 일치(대소문자 무시)
fn list_filter(search: Option<&str>) -> Document {
    let mut filter = doc! { "is_active": true };

    if let Some(term) = search {
        let pattern = escape_regex(term);
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": pattern.as_str(), "$options": "i" } },
                doc! { "email": { "$regex": pattern.as_str(), "$options": "i" } },
            ],
        );
    }

    filter
}

/// 최신순 정렬. 같은 밀리초에 생성된 문서는 `_id` 역순으로 고정합니다.
fn list_sort() -> Document {
    doc! { "created_at": -1, "_id": -1 }
}

/// 패치에서 `$set` 문서를 만듭니다. `updated_at`은 항상 포함됩니다.
fn set_document(patch: &UserPatch) -> Document {
    let mut set = doc! { "updated_at": DateTime::now() };

    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(email) = &patch.email {
        set.insert("email", email.as_str());
    }
    if let Some(role) = patch.role {
        set.insert("role", role.as_str());
    }
    if let Some(hash) = &patch.password_hash {
        set.insert("password_hash", hash.as_str());
    }

    set
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(Self::email_conflict());
        }

        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(Self::map_write_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("inserted _id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(doc! { "email": email, "is_active": true })
            .await?)
    }

    async fn find_active_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(doc! { "_id": *id, "is_active": true })
            .await?)
    }

    async fn email_taken_by_other(&self, email: &str, exclude_id: &ObjectId) -> AppResult<bool> {
        let existing = self
            .collection
            .find_one(doc! { "email": email, "_id": { "$ne": *exclude_id } })
            .await?;

        Ok(existing.is_some())
    }

    async fn update_fields(&self, id: &ObjectId, patch: UserPatch) -> AppResult<Option<User>> {
        self.collection
            .find_one_and_update(
                doc! { "_id": *id, "is_active": true },
                doc! { "$set": set_document(&patch) },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(Self::map_write_error)
    }

    async fn soft_delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": *id, "is_active": true },
                doc! { "$set": { "is_active": false, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.modified_count > 0)
    }

    async fn list_active(&self, filter: UserFilter) -> AppResult<(Vec<User>, u64)> {
        let query = list_filter(filter.search.as_deref());

        let total = self.collection.count_documents(query.clone()).await?;

        let users: Vec<User> = self
            .collection
            .find(query)
            .sort(list_sort())
            .skip(filter.skip)
            .limit(i64::try_from(filter.limit).unwrap_or(i64::MAX))
            .await?
            .try_collect()
            .await?;

        Ok((users, total))
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let active_index = IndexModel::builder()
            .keys(doc! { "is_active": 1 })
            .options(IndexOptions::builder()
                .name("is_active".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index, active_index])
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::Role;

    #[test]
    fn test_list_filter_without_search() {
        assert_eq!(list_filter(None), doc! { "is_active": true });
    }

    #[test]
    fn test_list_filter_escapes_search_term() {
        let filter = list_filter(Some("a.b"));
        let or = filter.get_array("$or").unwrap();

        assert_eq!(or.len(), 2);
        let name = or[0].as_document().unwrap().get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "a\\.b");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_list_sort_breaks_ties_by_id() {
        let sort = list_sort();
        let keys: Vec<&str> = sort.keys().map(String::as_str).collect();

        assert_eq!(keys, ["created_at", "_id"]);
        assert_eq!(sort.get_i32("_id").unwrap(), -1);
    }

    #[test]
    fn test_set_document_only_contains_supplied_fields() {
        let patch = UserPatch {
            name: Some("Bob".to_string()),
            role: Some(Role::Admin),
            ..Default::default()
        };
        let set = set_document(&patch);

        assert_eq!(set.get_str("name").unwrap(), "Bob");
        assert_eq!(set.get_str("role").unwrap(), "admin");
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("email"));
        assert!(!set.contains_key("password_hash"));
    }
}
