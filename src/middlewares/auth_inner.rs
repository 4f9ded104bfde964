//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::{AppError, AppState};
use crate::domain::entities::users::user::Role;
use crate::domain::models::auth::CurrentUser;
use crate::services::auth::{guard, role_gate};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub allowed_roles: Option<Rc<Vec<Role>>>,
}

/// 에러를 응답 봉투로 바꿔 요청 처리를 중단합니다.
fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let allowed_roles = self.allowed_roles.clone();

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                log::error!("AppState가 등록되지 않았습니다");
                return Ok(reject(req, AppError::InternalError("application state missing".to_string())));
            };

            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);

            let store = state.store();
            let resolved = match guard::resolve_identity(
                auth_header.as_deref(),
                &state.token_service,
                store.as_ref(),
            )
            .await
            {
                Ok(resolved) => resolved,
                Err(err) => {
                    log::warn!("인증 실패: {} {}", req.method(), req.path());
                    return Ok(reject(req, err));
                }
            };

            if let Some(allowed) = &allowed_roles {
                if let Err(err) = role_gate::require_role(&resolved.identity, allowed) {
                    return Ok(reject(req, err));
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", resolved.identity.id);
            req.extensions_mut().insert(resolved.identity);
            req.extensions_mut().insert(CurrentUser(resolved.user));

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
