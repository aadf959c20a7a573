// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::note::{NewNote, Note};
use async_trait::async_trait;

/// 笔记仓库特质
///
/// 所有按 slug 读取的接口都以作者为范围，非作者访问与记录不存在无法区分
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// 创建笔记
    async fn create(&self, note: &NewNote) -> Result<Note, RepositoryError>;
    /// 查找属于指定作者的笔记
    async fn find_by_author_and_slug(
        &self,
        author_id: i32,
        slug: &str,
    ) -> Result<Option<Note>, RepositoryError>;
    /// 列出作者的全部笔记，按ID升序
    async fn list_by_author(&self, author_id: i32) -> Result<Vec<Note>, RepositoryError>;
    /// slug 是否已被占用，`exclude_id` 用于编辑时排除自身
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>)
        -> Result<bool, RepositoryError>;
    /// 更新笔记
    async fn update(&self, note: &Note) -> Result<Note, RepositoryError>;
    /// 删除笔记
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
