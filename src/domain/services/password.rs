// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::Error as PasswordHashError;
use rand::Rng;

use crate::config::settings::AuthSettings;
use crate::domain::errors::DomainError;

const SALT_LEN: usize = password_hash::Salt::RECOMMENDED_LENGTH;
const OUTPUT_LEN: usize = 32;

impl From<PasswordHashError> for DomainError {
    fn from(err: PasswordHashError) -> Self {
        DomainError::Internal(format!("password hashing error: {}", err))
    }
}

/// 密码哈希器
///
/// 使用 Argon2id，结果以 PHC 字符串存储（`$argon2id$v=19$m=..,t=..,p=..$salt$hash`）。
/// 校验时参数取自存储的字符串本身，因此调整配置不会使旧哈希失效。
#[derive(Debug)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// 按给定的 Argon2 参数创建哈希器
    ///
    /// # 参数
    ///
    /// * `memory_kib` - 内存开销（KiB）
    /// * `time_cost` - 迭代次数
    /// * `parallelism` - 并行度
    ///
    /// # 返回值
    ///
    /// * `Ok(PasswordHasher)` - 哈希器
    /// * `Err(DomainError::Internal)` - 参数超出 Argon2 允许的范围
    pub fn new(memory_kib: u32, time_cost: u32, parallelism: u32) -> Result<Self, DomainError> {
        let params = Params::new(memory_kib, time_cost, parallelism, Some(OUTPUT_LEN))
            .map_err(|e| DomainError::Internal(format!("invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// 由认证配置创建哈希器
    pub fn from_settings(settings: &AuthSettings) -> Result<Self, DomainError> {
        Self::new(
            settings.password_memory_kib,
            settings.password_time_cost,
            settings.password_parallelism,
        )
    }

    /// 生成带随机盐的密码哈希
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt_bytes[..]);
        let salt = SaltString::encode_b64(&salt_bytes)?;

        Ok(self
            .argon2
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    /// 校验密码
    ///
    /// 空哈希或无法解析的哈希一律校验失败
    pub fn verify(&self, password: &str, encoded: &str) -> bool {
        match PasswordHash::new(encoded) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
