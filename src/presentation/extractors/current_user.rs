// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;
use std::convert::Infallible;

use crate::domain::models::user::User;
use crate::presentation::redirect::{found, login_url_with_next};

/// 会话中间件写入请求扩展的已登录用户
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// 必须登录的处理器使用的提取器
///
/// 正常情况下登录检查中间件已经拦截了匿名请求；若处理器被挂在未受保护的
/// 路由上，匿名访问同样被重定向到登录页。
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticatedUser>() {
            Some(auth) => Ok(CurrentUser(auth.user.clone())),
            None => {
                let requested = parts
                    .uri
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or_else(|| parts.uri.path());
                Err(found(&login_url_with_next(requested)))
            }
        }
    }
}

/// 公开页面使用的提取器，匿名访问时为 `None`
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .map(|auth| auth.user.clone()),
        ))
    }
}
