// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::models::note::{NewNote, Note, NoteDraft};
use crate::domain::repositories::note_repository::NoteRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::slug::slugify;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// slug 重复时追加在 slug 之后的提示
pub const SLUG_TAKEN_WARNING: &str =
    " - такой slug уже существует, придумайте уникальное значение!";

/// 笔记服务
///
/// 负责笔记的校验、slug 生成以及“仅作者可见”的访问规则。
/// 凡是按 slug 访问单条笔记的操作都以作者为范围查找，
/// 他人的笔记与不存在的笔记同样返回 [`DomainError::NotFound`]。
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    /// 创建新的笔记服务实例
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// 为作者创建笔记
    ///
    /// # 参数
    ///
    /// * `author_id` - 作者ID
    /// * `draft` - 表单内容，`slug` 为空时由标题生成
    ///
    /// # 返回值
    ///
    /// * `Ok(Note)` - 已保存的笔记
    /// * `Err(DomainError::Validation)` - 表单不合法或 slug 已被占用
    pub async fn create(&self, author_id: i32, draft: NoteDraft) -> Result<Note, DomainError> {
        let slug = self.clean(&draft, None).await?;
        let new_note = NewNote {
            title: draft.title,
            text: draft.text,
            slug,
            author_id,
        };
        let note = self
            .repo
            .create(&new_note)
            .await
            .map_err(|e| slug_conflict(e, &new_note.slug))?;

        info!("Note '{}' created by user {}", note.slug, author_id);
        Ok(note)
    }

    /// 作者的笔记列表
    pub async fn list_for(&self, author_id: i32) -> Result<Vec<Note>, DomainError> {
        Ok(self.repo.list_by_author(author_id).await?)
    }

    /// 读取属于作者的笔记
    pub async fn get_owned(&self, author_id: i32, slug: &str) -> Result<Note, DomainError> {
        match self.repo.find_by_author_and_slug(author_id, slug).await? {
            Some(note) => Ok(note),
            None => {
                debug!("Note '{}' not visible to user {}", slug, author_id);
                Err(DomainError::NotFound)
            }
        }
    }

    /// 更新属于作者的笔记
    pub async fn update_owned(
        &self,
        author_id: i32,
        slug: &str,
        draft: NoteDraft,
    ) -> Result<Note, DomainError> {
        let existing = self.get_owned(author_id, slug).await?;
        let new_slug = self.clean(&draft, Some(existing.id)).await?;

        let note = Note {
            id: existing.id,
            title: draft.title,
            text: draft.text,
            slug: new_slug,
            author_id: existing.author_id,
        };
        let updated = self
            .repo
            .update(&note)
            .await
            .map_err(|e| slug_conflict(e, &note.slug))?;

        info!("Note '{}' updated by user {}", updated.slug, author_id);
        Ok(updated)
    }

    /// 删除属于作者的笔记
    pub async fn delete_owned(&self, author_id: i32, slug: &str) -> Result<(), DomainError> {
        let existing = self.get_owned(author_id, slug).await?;
        self.repo.delete(existing.id).await?;

        info!("Note '{}' deleted by user {}", existing.slug, author_id);
        Ok(())
    }

    /// 校验表单并确定最终 slug
    async fn clean(
        &self,
        draft: &NoteDraft,
        exclude_id: Option<i32>,
    ) -> Result<String, DomainError> {
        draft.validate()?;

        let slug = if draft.slug.trim().is_empty() {
            slugify(&draft.title)
        } else {
            draft.slug.trim().to_string()
        };

        if slug.is_empty() {
            return Err(DomainError::Validation(FieldErrors::single(
                "slug",
                "Could not derive a slug from the title, please enter one.",
            )));
        }

        if self.repo.slug_exists(&slug, exclude_id).await? {
            return Err(slug_taken(&slug));
        }

        Ok(slug)
    }
}

fn slug_taken(slug: &str) -> DomainError {
    DomainError::Validation(FieldErrors::single(
        "slug",
        format!("{}{}", slug, SLUG_TAKEN_WARNING),
    ))
}

/// 并发写入时唯一约束仍可能冲突，此时给出与预先检查相同的表单错误
fn slug_conflict(err: RepositoryError, slug: &str) -> DomainError {
    match err {
        RepositoryError::Duplicate(_) => slug_taken(slug),
        other => other.into(),
    }
}
