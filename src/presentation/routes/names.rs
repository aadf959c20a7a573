// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static SLUG_ARG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug argument pattern is valid"));

/// 路由访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTier {
    /// 所有人可访问
    Public,
    /// 需要登录，匿名用户被重定向到登录页
    Authenticated,
    /// 需要登录且必须是资源作者，其他用户得到 404
    OwnerOnly,
}

/// 命名路由
///
/// 名称形如 `notes:edit`，与页面一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Add,
    List,
    Success,
    Detail,
    Edit,
    Delete,
    Login,
    Logout,
    Signup,
}

/// 反向解析错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReverseError {
    #[error("unknown route name: {0}")]
    UnknownRoute(String),
    #[error("route {name} expects {expected} argument(s), got {got}")]
    ArgumentCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("'{0}' is not a valid slug")]
    InvalidSlug(String),
}

impl RouteName {
    /// 全部命名路由
    pub const ALL: [RouteName; 10] = [
        RouteName::Home,
        RouteName::Add,
        RouteName::List,
        RouteName::Success,
        RouteName::Detail,
        RouteName::Edit,
        RouteName::Delete,
        RouteName::Login,
        RouteName::Logout,
        RouteName::Signup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "notes:home",
            RouteName::Add => "notes:add",
            RouteName::List => "notes:list",
            RouteName::Success => "notes:success",
            RouteName::Detail => "notes:detail",
            RouteName::Edit => "notes:edit",
            RouteName::Delete => "notes:delete",
            RouteName::Login => "users:login",
            RouteName::Logout => "users:logout",
            RouteName::Signup => "users:signup",
        }
    }

    /// axum 路由模式，带参数的路由使用 `{slug}` 占位
    pub fn pattern(&self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::Add => "/add/",
            RouteName::List => "/notes/",
            RouteName::Success => "/done/",
            RouteName::Detail => "/note/{slug}/",
            RouteName::Edit => "/edit/{slug}/",
            RouteName::Delete => "/delete/{slug}/",
            RouteName::Login => "/auth/login/",
            RouteName::Logout => "/auth/logout/",
            RouteName::Signup => "/auth/signup/",
        }
    }

    pub fn access_tier(&self) -> AccessTier {
        match self {
            RouteName::Home | RouteName::Login | RouteName::Logout | RouteName::Signup => {
                AccessTier::Public
            }
            RouteName::Add | RouteName::List | RouteName::Success => AccessTier::Authenticated,
            RouteName::Detail | RouteName::Edit | RouteName::Delete => AccessTier::OwnerOnly,
        }
    }

    /// 路由所需参数个数
    pub fn arity(&self) -> usize {
        match self.access_tier() {
            AccessTier::OwnerOnly => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = ReverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ReverseError::UnknownRoute(s.to_string()))
    }
}

/// 由路由名和参数生成路径
///
/// # 示例
///
/// ```
/// use yanote::presentation::routes::names::{reverse, RouteName};
///
/// assert_eq!(reverse(RouteName::Edit, &["zagolovok"]).unwrap(), "/edit/zagolovok/");
/// assert_eq!(reverse(RouteName::List, &[]).unwrap(), "/notes/");
/// ```
pub fn reverse(name: RouteName, args: &[&str]) -> Result<String, ReverseError> {
    if args.len() != name.arity() {
        return Err(ReverseError::ArgumentCount {
            name: name.as_str(),
            expected: name.arity(),
            got: args.len(),
        });
    }

    match args.first() {
        None => Ok(name.pattern().to_string()),
        Some(slug) => {
            if !SLUG_ARG_RE.is_match(slug) {
                return Err(ReverseError::InvalidSlug(slug.to_string()));
            }
            Ok(name.pattern().replace("{slug}", slug))
        }
    }
}

/// 按文本名称反向解析，例如 `reverse_name("notes:detail", &["zagolovok"])`
pub fn reverse_name(name: &str, args: &[&str]) -> Result<String, ReverseError> {
    reverse(name.parse()?, args)
}
