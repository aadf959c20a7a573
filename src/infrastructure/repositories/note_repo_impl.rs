// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::note::{NewNote, Note};
use crate::domain::repositories::note_repository::NoteRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::note;
use crate::infrastructure::repositories::map_write_err;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 笔记仓库实现
#[derive(Clone)]
pub struct NoteRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl NoteRepositoryImpl {
    /// 创建新的笔记仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NoteRepository for NoteRepositoryImpl {
    async fn create(&self, note: &NewNote) -> Result<Note, RepositoryError> {
        let model = note::ActiveModel {
            id: NotSet,
            title: Set(note.title.clone()),
            text: Set(note.text.clone()),
            slug: Set(note.slug.clone()),
            author_id: Set(note.author_id),
        };

        let inserted = model.insert(self.db.as_ref()).await.map_err(map_write_err)?;
        Ok(inserted.into())
    }

    async fn find_by_author_and_slug(
        &self,
        author_id: i32,
        slug: &str,
    ) -> Result<Option<Note>, RepositoryError> {
        let model = note::Entity::find()
            .filter(note::Column::Slug.eq(slug))
            .filter(note::Column::AuthorId.eq(author_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_by_author(&self, author_id: i32) -> Result<Vec<Note>, RepositoryError> {
        let models = note::Entity::find()
            .filter(note::Column::AuthorId.eq(author_id))
            .order_by_asc(note::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let mut query = note::Entity::find().filter(note::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(note::Column::Id.ne(id));
        }

        let count = query.count(self.db.as_ref()).await?;
        Ok(count > 0)
    }

    async fn update(&self, note: &Note) -> Result<Note, RepositoryError> {
        let model = note::ActiveModel {
            id: Unchanged(note.id),
            title: Set(note.title.clone()),
            text: Set(note.text.clone()),
            slug: Set(note.slug.clone()),
            author_id: Unchanged(note.author_id),
        };

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(map_write_err(e)),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = note::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<note::Model> for Note {
    fn from(model: note::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            text: model.text,
            slug: model.slug,
            author_id: model.author_id,
        }
    }
}
