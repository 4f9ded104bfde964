//! Database Connection Management Module
//!
//! MongoDB 연결 풀과 데이터베이스 핸들을 관리합니다.
//! `main`에서 한 번 연결하고, 저장소에 명시적으로 전달한 뒤
//! 서버 종료 후 [`Database::shutdown`]으로 정리합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let repository = UserRepository::new(&database);
//! // ... 서버 실행 ...
//! database.shutdown().await;
//! ```

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 확인합니다.
    ///
    /// 풀 크기와 서버 선택 타임아웃은 [`DatabaseConfig`]를 따릅니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::ConfigurationError(format!("invalid MONGODB_URI: {}", e)))?;

        client_options.app_name = Some("credential_gate".to_string());
        client_options.max_pool_size = Some(config.max_pool_size);
        client_options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(client_options)?;

        client
            .database(&config.name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    /// 컬렉션 접근용 `mongodb::Database` 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 커넥션 풀을 닫습니다. 진행 중인 커서/세션이 정리될 때까지 기다립니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }
}
