// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::session;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;

/// 会话仓库实现
#[derive(Clone)]
pub struct SessionRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn create(&self, session: &Session) -> Result<Session, RepositoryError> {
        let model = session::ActiveModel {
            token: Set(session.token.clone()),
            user_id: Set(session.user_id),
            expires_at: Set(session.expires_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(session.clone())
    }

    async fn find(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        let model = session::Entity::find_by_id(token.to_string())
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn delete(&self, token: &str) -> Result<(), RepositoryError> {
        session::Entity::delete_by_id(token.to_string())
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let result = session::Entity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}

impl From<session::Model> for Session {
    fn from(model: session::Model) -> Self {
        Self {
            token: model.token,
            user_id: model.user_id,
            expires_at: model.expires_at,
        }
    }
}
