// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::presentation::routes::names::RouteName;

/// `302 Found` 重定向
///
/// axum 自带的 `Redirect::to` 返回 303，这里保持经典的 302 语义
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// 带 `next` 参数的登录地址
///
/// `next` 做百分号编码，但保留 `/`，因此 `/notes/` 原样出现在查询串中
pub fn login_url_with_next(next: &str) -> String {
    format!("{}?next={}", RouteName::Login.pattern(), encode_next(next))
}

fn encode_next(next: &str) -> String {
    urlencoding::encode(next).replace("%2F", "/")
}

/// `next` 是否可以安全地用作登录后的跳转目标
///
/// 只接受站内绝对路径：必须以单个 `/` 开头，不能是 `//host` 形式，
/// 不能含反斜杠或控制字符（浏览器会丢弃 URL 中的制表符和换行）
pub fn is_safe_next(next: &str) -> bool {
    next.starts_with('/')
        && !next.starts_with("//")
        && !next.contains('\\')
        && !next.chars().any(char::is_control)
}
