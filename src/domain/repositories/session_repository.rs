// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::session::Session;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// 会话仓库特质
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 保存会话
    async fn create(&self, session: &Session) -> Result<Session, RepositoryError>;
    /// 根据令牌查找会话
    async fn find(&self, token: &str) -> Result<Option<Session>, RepositoryError>;
    /// 删除会话，令牌不存在时不报错
    async fn delete(&self, token: &str) -> Result<(), RepositoryError>;
    /// 删除在给定时间点之前过期的会话，返回删除数量
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
