// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::DomainError;
use crate::domain::models::session::Session;
use crate::domain::models::user::User;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::user_repository::UserRepository;
use chrono::{Duration, Utc};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

const TOKEN_BYTES: usize = 32;

/// 会话服务
///
/// 会话令牌是 32 字节随机数的十六进制表示。过期会话在读取时惰性删除。
pub struct SessionService {
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
        ttl: Duration,
    ) -> Self {
        Self {
            sessions,
            users,
            ttl,
        }
    }

    /// 为用户开启会话，不检查密码
    pub async fn open(&self, user_id: i32) -> Result<Session, DomainError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill(&mut bytes[..]);

        let session = Session {
            token: hex::encode(bytes),
            user_id,
            expires_at: Utc::now() + self.ttl,
        };

        let session = self.sessions.create(&session).await?;
        debug!("Session opened for user {}", user_id);
        Ok(session)
    }

    /// 根据令牌找回用户，令牌未知或已过期时返回 `None`
    pub async fn resolve(&self, token: &str) -> Result<Option<User>, DomainError> {
        let Some(session) = self.sessions.find(token).await? else {
            return Ok(None);
        };

        if session.is_expired_at(Utc::now()) {
            debug!("Session for user {} expired", session.user_id);
            self.sessions.delete(token).await?;
            return Ok(None);
        }

        Ok(self.users.find_by_id(session.user_id).await?)
    }

    /// 结束会话
    pub async fn close(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.delete(token).await?;
        Ok(())
    }

    /// 清理所有过期会话
    pub async fn purge_expired(&self) -> Result<u64, DomainError> {
        Ok(self.sessions.delete_expired(Utc::now()).await?)
    }
}
