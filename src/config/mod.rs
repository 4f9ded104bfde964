//! # Configuration Module
//!
//! 환경 변수 기반 설정을 타입이 있는 구조체로 읽어옵니다.
//! 설정은 `main`에서 기동 시 한 번 구성되어 각 컴포넌트에 전달됩니다.
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, 레이트 리밋, CORS, bcrypt cost
//! - [`auth_config`] - JWT 서명 설정, 관리자 부트스트랩
//!
//! ## 환경 변수 요약
//!
//! ```bash
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="credential_gate"
//! export JWT_SECRET="your-super-secret-key"   # 필수
//! export JWT_EXPIRES_IN="7d"
//! export BCRYPT_COST="12"                # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
