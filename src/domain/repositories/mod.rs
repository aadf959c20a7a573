// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

/// 仓库接口模块
///
/// 定义领域层的持久化契约，具体实现由基础设施层提供：
/// - 用户仓库（user_repository）
/// - 笔记仓库（note_repository）
/// - 会话仓库（session_repository）
pub mod note_repository;
pub mod session_repository;
pub mod user_repository;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 违反唯一约束
    #[error("Duplicate record: {0}")]
    Duplicate(String),
}
