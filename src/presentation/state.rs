// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::errors::DomainError;
use crate::domain::services::note_service::NoteService;
use crate::domain::services::password::PasswordHasher;
use crate::domain::services::session_service::SessionService;
use crate::domain::services::user_service::UserService;
use crate::infrastructure::repositories::note_repo_impl::NoteRepositoryImpl;
use crate::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 应用共享状态
///
/// 处理器和中间件通过 axum `State` 获取各领域服务
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<NoteService>,
    pub users: Arc<UserService>,
    pub sessions: Arc<SessionService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// 基于数据库连接装配全部仓库和服务
    ///
    /// # 返回值
    ///
    /// * `Ok(AppState)` - 装配好的状态
    /// * `Err(DomainError)` - 密码哈希参数不合法
    pub fn new(
        db: Arc<DatabaseConnection>,
        settings: Arc<Settings>,
    ) -> Result<Self, DomainError> {
        let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
        let note_repo = Arc::new(NoteRepositoryImpl::new(db.clone()));
        let session_repo = Arc::new(SessionRepositoryImpl::new(db));

        let hasher = PasswordHasher::from_settings(&settings.auth)?;
        let ttl = chrono::Duration::seconds(settings.auth.session_ttl_secs);

        Ok(Self {
            notes: Arc::new(NoteService::new(note_repo)),
            users: Arc::new(UserService::new(user_repo.clone(), hasher)),
            sessions: Arc::new(SessionService::new(session_repo, user_repo, ttl)),
            settings,
        })
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.settings.auth.session_cookie_name
    }
}
