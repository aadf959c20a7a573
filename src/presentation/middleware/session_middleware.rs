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

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::AuthenticatedUser;
use crate::presentation::state::AppState;

/// 会话中间件
///
/// 从 Cookie 中读取会话令牌并找回用户。找到时把 [`AuthenticatedUser`]
/// 写入请求扩展；令牌缺失、未知或过期时请求按匿名继续处理。
///
/// # 返回值
///
/// * `Ok(Response)` - 下游处理器的响应
/// * `Err(AppError)` - 查询会话时数据库出错
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = CookieJar::from_headers(req.headers())
        .get(state.session_cookie_name())
        .map(|cookie| cookie.value().to_string());

    if let Some(token) = token {
        match state.sessions.resolve(&token).await? {
            Some(user) => {
                debug!("Request authenticated as user {}", user.id);
                req.extensions_mut().insert(AuthenticatedUser { user });
            }
            None => debug!("Ignoring unknown or expired session cookie"),
        }
    }

    Ok(next.run(req).await)
}
