//! # Routes Module
//!
//! 라우트 등록과 추출기(JSON/Query/Path) 에러 처리를 한곳에서 구성합니다.
//!
//! ```text
//! GET    /health
//! POST   /api/auth/register
//! POST   /api/auth/login
//! GET    /api/auth/me                    (bearer)
//! GET    /api/users                      (bearer, admin)
//! PUT    /api/users/change-password      (bearer)
//! GET    /api/users/{id}                 (bearer)
//! PUT    /api/users/{id}                 (bearer, 본인 또는 admin)
//! DELETE /api/users/{id}                 (bearer, admin; 본인 계정은 400)
//! ```
//!
//! 등록되지 않은 경로는 [`not_found`]가 404 봉투로 응답합니다.

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::Environment;
use crate::core::AppError;
use crate::handlers;

/// JSON 바디 최대 크기 (10MB)
pub const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// let app = App::new()
///     .app_data(state.clone())
///     .configure(configure_all_routes)
///     .default_service(web::to(not_found));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::me),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            // `/{user_id}`보다 먼저 등록
            .service(handlers::users::change_password)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 잘못된 JSON 바디를 400 봉투로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            log::debug!("JSON 바디 파싱 실패: {}", err);
            let message = match &err {
                error::JsonPayloadError::OverflowKnownLength { .. }
                | error::JsonPayloadError::Overflow { .. } => "Request body is too large",
                error::JsonPayloadError::ContentType => "Content-Type must be application/json",
                _ => "Invalid JSON payload",
            };
            AppError::ValidationError(message.to_string()).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("쿼리 파싱 실패: {}", err);
        AppError::ValidationError("Invalid query parameters".to_string()).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("경로 파라미터 파싱 실패: {}", err);
        AppError::ValidationError("Invalid path parameters".to_string()).into()
    })
}

/// 등록되지 않은 경로
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("Route not found: {} {}", req.method(), req.path());
    Err(AppError::NotFound("Route not found".to_string()))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "OK",
///   "message": "Server is running",
///   "timestamp": "2024-06-04T10:00:00+00:00",
///   "environment": "production",
///   "version": "0.1.0"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": Environment::current().as_str(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::config::JwtConfig;
    use crate::core::AppState;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::memory_repo::InMemoryUserRepository;
    use crate::repositories::users::UserStore;
    use crate::services::auth::{PasswordService, TokenService};
    use crate::services::users::UserService;

    fn state() -> (web::Data<AppState>, Arc<InMemoryUserRepository>) {
        let store = Arc::new(InMemoryUserRepository::new());
        let tokens = TokenService::new(&JwtConfig {
            secret: "routes-secret".to_string(),
            expires_in: chrono::Duration::days(7),
        });
        let users = UserService::new(store.clone(), PasswordService::new(4));
        (web::Data::new(AppState::new(users, tokens)), store)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .configure(configure_all_routes)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    async fn seed_admin(state: &AppState, store: &InMemoryUserRepository) -> String {
        let hash = PasswordService::new(4).hash("AdminPass1").unwrap();
        let admin = store
            .create(User::new_admin("admin@example.com".into(), "Admin".into(), hash))
            .await
            .unwrap();
        format!("Bearer {}", state.token_service.issue(&admin).unwrap())
    }

    #[actix_web::test]
    async fn test_health() {
        let (state, _) = state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Server is running");
        assert!(body["timestamp"].is_string());
        assert!(body["environment"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_404_envelope() {
        let (state, _) = state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Route not found");
    }

    #[actix_web::test]
    async fn test_register_login_and_self_delete_flow() {
        let (state, _) = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "email": "alice@example.com", "password": "secret1", "name": "Alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["role"], "user");
        assert!(body["data"]["user"].get("password_hash").is_none());
        let first_token = body["data"]["token"].as_str().unwrap().to_string();
        let alice_id = body["data"]["user"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "alice@example.com", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid email or password");

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "alice@example.com", "password": "secret1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let second_token = body["data"]["token"].as_str().unwrap().to_string();
        assert_ne!(first_token, second_token);

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", second_token)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["user"]["email"], "alice@example.com");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", alice_id))
            .insert_header(("Authorization", format!("Bearer {}", second_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Cannot delete your own account");
    }

    #[actix_web::test]
    async fn test_duplicate_registration_is_409() {
        let (state, _) = state();
        let app = app!(state);
        let payload = json!({ "email": "bob@example.com", "password": "secret1", "name": "Bob" });

        let req = test::TestRequest::post().uri("/api/auth/register").set_json(&payload).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post().uri("/api/auth/register").set_json(&payload).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_register_validation_errors() {
        let (state, _) = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "email": "not-an-email", "password": "123", "name": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["field"].as_str())
            .collect();
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"name"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let (state, _) = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_users_requires_admin() {
        let (state, store) = state();
        let app = app!(state);
        let admin_header = seed_admin(&state, &store).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "email": "carol@example.com", "password": "secret1", "name": "Carol" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let user_header = format!("Bearer {}", body["data"]["token"].as_str().unwrap());

        let req = test::TestRequest::get()
            .uri("/api/users")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header(("Authorization", user_header))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/users?page=1&limit=1")
            .insert_header(("Authorization", admin_header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["users"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["users"][0]["email"], "carol@example.com");
        assert_eq!(body["data"]["pagination"]["total"], 2);
        assert_eq!(body["data"]["pagination"]["pages"], 2);
    }

    #[actix_web::test]
    async fn test_huge_page_returns_empty_list() {
        let (state, store) = state();
        let app = app!(state);
        let admin_header = seed_admin(&state, &store).await;

        let req = test::TestRequest::get()
            .uri("/api/users?page=100000000000000000&limit=100")
            .insert_header(("Authorization", admin_header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["users"].as_array().unwrap().is_empty());
        assert_eq!(body["data"]["pagination"]["total"], 1);
    }

    #[actix_web::test]
    async fn test_invalid_user_id_is_400() {
        let (state, store) = state();
        let app = app!(state);
        let admin_header = seed_admin(&state, &store).await;

        let req = test::TestRequest::get()
            .uri("/api/users/not-an-object-id")
            .insert_header(("Authorization", admin_header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid user ID format");
    }

    #[actix_web::test]
    async fn test_change_password_route_is_not_shadowed_by_id_route() {
        let (state, _) = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "email": "dave@example.com", "password": "secret1", "name": "Dave" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let header = format!("Bearer {}", body["data"]["token"].as_str().unwrap());

        let req = test::TestRequest::put()
            .uri("/api/users/change-password")
            .insert_header(("Authorization", header))
            .set_json(json!({ "currentPassword": "secret1", "newPassword": "secret2" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "dave@example.com", "password": "secret2" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
