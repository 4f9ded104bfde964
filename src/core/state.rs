//! 애플리케이션 공유 상태
//!
//! 요청 간에 공유되는 불변 핸들 묶음입니다. 가변 상태는 없고,
//! 저장소 연결 풀은 `UserStore` 구현체 내부에서만 관리됩니다.

use std::sync::Arc;

use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 핸들러와 미들웨어가 `web::Data<AppState>`로 받는 상태
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub token_service: TokenService,
}

impl AppState {
    pub fn new(user_service: UserService, token_service: TokenService) -> Self {
        Self {
            user_service,
            token_service,
        }
    }

    /// Access Guard가 토큰의 사용자 ID를 조회할 때 사용하는 저장소 핸들
    pub fn store(&self) -> Arc<dyn UserStore> {
        self.user_service.store()
    }
}
