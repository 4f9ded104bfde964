//! Credential Gate 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤, 서비스를 조립해 Actix-web 서버를 구동합니다.
//! 필수 설정(`JWT_SECRET`)이 없거나 데이터베이스에 연결할 수 없으면 기동하지 않습니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use credential_gate::config::{
    AdminSeedConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, PasswordConfig,
    RateLimitConfig, ServerConfig,
};
use credential_gate::core::{AppError, AppState};
use credential_gate::db::Database;
use credential_gate::repositories::users::{UserRepository, UserStore};
use credential_gate::routes::{configure_all_routes, not_found};
use credential_gate::services::auth::{PasswordService, TokenService};
use credential_gate::services::users::UserService;
use credential_gate::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, StartupSummary,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("🔐 CREDENTIAL GATE");
    info!("🚀 Credential Gate 시작중...");

    let server_config = ServerConfig::from_env();
    let environment = Environment::current();

    print_step_start(1, "설정 로드");
    let jwt_config = JwtConfig::from_env().map_err(fatal)?;
    let bcrypt_cost = PasswordConfig::bcrypt_cost();
    print_step_complete(1, "설정 로드");

    print_step_start(2, "MongoDB 연결");
    let database = Database::connect(&DatabaseConfig::from_env())
        .await
        .map_err(fatal)?;
    print_step_complete(2, "MongoDB 연결");

    print_step_start(3, "서비스 초기화");
    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
    store.create_indexes().await.map_err(fatal)?;

    let passwords = PasswordService::new(bcrypt_cost);
    let user_service = UserService::new(store, passwords);
    let token_service = TokenService::new(&jwt_config);

    match AdminSeedConfig::from_env() {
        Some(seed) => match user_service.seed_admin(&seed).await {
            Ok(true) => info!("👤 관리자 계정 생성: {}", seed.email),
            Ok(false) => info!("👤 관리자 계정이 이미 존재합니다: {}", seed.email),
            Err(e) => warn!("관리자 계정 생성 실패: {}", e),
        },
        None => info!("ADMIN_EMAIL/ADMIN_PASSWORD 미설정, 관리자 부트스트랩 생략"),
    }
    print_step_complete(3, "서비스 초기화");

    let bind_address = server_config.bind_address();
    StartupSummary {
        environment: environment.as_str(),
        bind_address: &bind_address,
        database: database.database_name(),
        token_ttl_secs: token_service.expires_in_secs(),
        bcrypt_cost: passwords.cost(),
    }
    .print();

    let state = web::Data::new(AppState::new(user_service, token_service));
    let result = start_http_server(state, &server_config).await;

    database.shutdown().await;
    info!("👋 서버 종료");

    result
}

/// 기동 단계의 치명적 에러를 로그로 남기고 프로세스 에러로 변환합니다.
fn fatal(err: AppError) -> io::Error {
    error!("❌ 기동 실패: {}", err);
    io::Error::other(err.to_string())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>, server_config: &ServerConfig) -> io::Result<()> {
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("invalid rate limit configuration"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
            .default_service(web::to(not_found))
    })
    .bind(&bind_address)?
    .workers(server_config.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남깁니다.
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => println!("Current profile: {} ({} 로드 됨)", profile, file),
        Err(e) => println!("Current profile: {} (env 파일 없음: {})", profile, e),
    }
}

/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 미들웨어를 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용하고,
/// 값이 있으면 목록의 Origin에만 자격 증명을 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
}
