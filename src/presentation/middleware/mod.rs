// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 会话识别与登录检查
pub mod login_required;
pub mod session_middleware;
