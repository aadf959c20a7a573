// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::presentation::extractors::current_user::AuthenticatedUser;
use crate::presentation::redirect::{found, login_url_with_next};

/// 登录检查中间件
///
/// 挂在需要登录的路由上。匿名请求得到 `302`，跳转到
/// `<登录页>?next=<原始路径及查询串>`；是否为作者由处理器再行判断。
pub async fn login_required(req: Request, next: Next) -> Response {
    if req.extensions().get::<AuthenticatedUser>().is_some() {
        return next.run(req).await;
    }

    let requested = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.uri().path());
    debug!("Anonymous request to {} redirected to login", requested);

    found(&login_url_with_next(requested))
}
