// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于 SeaORM 的领域仓库接口实现
pub mod note_repo_impl;
pub mod session_repo_impl;
pub mod user_repo_impl;

use crate::domain::repositories::RepositoryError;
use sea_orm::{DbErr, SqlErr};

/// 写入错误映射，唯一约束冲突转换为 [`RepositoryError::Duplicate`]
pub(crate) fn map_write_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::Duplicate(detail),
        _ => RepositoryError::Database(err),
    }
}
