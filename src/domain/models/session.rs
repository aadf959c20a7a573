// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};

/// 登录会话
///
/// 令牌保存在客户端 Cookie 中，服务端据此找回用户
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// 随机会话令牌
    pub token: String,
    /// 会话所属用户
    pub user_id: i32,
    /// 过期时间
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// 会话在给定时间点是否已过期
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
