// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// yanote 迁移命令行
///
/// 读取 `DATABASE_URL`，支持 `up`、`down`、`status`、`fresh` 等子命令，
/// 用于在服务启动前单独维护 users、notes、sessions 三张表
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
