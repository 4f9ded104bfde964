//! 비밀번호 해싱 서비스
//!
//! bcrypt 해시/검증은 CPU를 오래 점유하므로 async 경로에서는
//! `web::block`으로 블로킹 스레드 풀에 넘깁니다.

use actix_web::web;

use crate::core::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 솔트가 포함된 bcrypt 해시를 생성합니다.
    pub fn hash(&self, plain: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 저장된 해시의 솔트로 다시 계산해 비교합니다.
    pub fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        bcrypt::verify(plain, hashed).context("비밀번호 검증 실패")
    }

    pub async fn hash_blocking(&self, plain: String) -> AppResult<String> {
        let service = *self;
        web::block(move || service.hash(&plain)).await?
    }

    /// 비교 대상 해시가 없을 때 검증과 같은 비용의 해시 계산만 수행합니다.
    pub async fn burn_verify_cost(&self, plain: String) -> AppResult<()> {
        self.hash_blocking(plain).await.map(|_| ())
    }

    pub async fn verify_blocking(&self, plain: String, hashed: String) -> AppResult<bool> {
        let service = *self;
        web::block(move || service.verify(&plain, &hashed)).await?
    }
}
