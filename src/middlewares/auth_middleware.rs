//! JWT 인증 미들웨어
//!
//! 라우트 단위로 Access Guard와 Role Gate를 적용합니다.
//!
//! ```rust,ignore
//! #[get("", wrap = "AuthMiddleware::required_with_roles(&[Role::Admin])")]
//! pub async fn list_users(...) -> Result<HttpResponse, AppError> { ... }
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::entities::users::user::Role;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 허용 역할 목록. `None`이면 인증만 요구합니다.
    allowed_roles: Option<Rc<Vec<Role>>>,
}

impl AuthMiddleware {
    /// 유효한 토큰과 활성 계정만 요구합니다.
    pub fn required() -> Self {
        Self { allowed_roles: None }
    }

    /// 인증 후 역할이 목록 중 하나여야 합니다.
    pub fn required_with_roles(roles: &[Role]) -> Self {
        Self {
            allowed_roles: Some(Rc::new(roles.to_vec())),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            allowed_roles: self.allowed_roles.clone(),
        }))
    }
}
