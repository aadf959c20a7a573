// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::models::user::{NewUser, SignupForm, User};
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::password::PasswordHasher;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// 用户服务
///
/// 处理注册、直接建号和密码认证
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    /// 直接创建用户，不校验用户名字符集
    ///
    /// 没有密码的用户只能通过 [`SessionService::open`](super::session_service::SessionService::open)
    /// 建立会话。
    pub async fn create_user(
        &self,
        username: &str,
        password: Option<&str>,
    ) -> Result<User, DomainError> {
        let password_hash = match password {
            Some(password) => self.hasher.hash(password)?,
            None => String::new(),
        };

        let user = self
            .repo
            .create(&NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(_) => username_taken(),
                other => other.into(),
            })?;

        info!("User {} created with id {}", user.username, user.id);
        Ok(user)
    }

    /// 注册新用户
    pub async fn signup(&self, form: SignupForm) -> Result<User, DomainError> {
        form.validate()?;

        if self.repo.find_by_username(&form.username).await?.is_some() {
            return Err(username_taken());
        }

        self.create_user(&form.username, Some(&form.password1)).await
    }

    /// 用户名密码认证
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        match self.repo.find_by_username(username).await? {
            Some(user) if self.hasher.verify(password, &user.password_hash) => Ok(user),
            _ => {
                warn!("Failed login attempt for {}", username);
                Err(DomainError::InvalidCredentials)
            }
        }
    }
}

fn username_taken() -> DomainError {
    DomainError::Validation(FieldErrors::single(
        "username",
        "A user with that username already exists.",
    ))
}
