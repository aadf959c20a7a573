// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求处理器模块
///
/// 笔记页面与用户认证页面
pub mod notes_handler;
pub mod users_handler;
