//! Credential Gate 백엔드
//!
//! 이메일/비밀번호 계정, JWT 기반 상태 없는 인증, 역할(user/admin) 기반
//! 사용자 관리를 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: bcrypt 해시 저장, HS256 액세스 토큰 발급
//! - **Access Guard**: Bearer 토큰 검증 후 활성 계정 확인
//! - **Role Gate**: 관리자 전용 라우트와 본인/관리자 수정 규칙
//! - **사용자 관리**: 페이지네이션 목록, 검색, 수정, 소프트 삭제, 비밀번호 변경
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Middlewares    │ ← Access Guard / Role Gate
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use credential_gate::services::users::UserService;
//! use credential_gate::services::auth::TokenService;
//!
//! let user = user_service.register(request).await?;
//! let token = token_service.issue(&user)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
