// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 笔记、用户和会话的业务规则，以及 slug 生成和密码哈希
pub mod note_service;
pub mod password;
pub mod session_service;
pub mod slug;
pub mod user_service;
