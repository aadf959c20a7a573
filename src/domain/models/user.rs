// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 用户名允许的字符：字母、数字以及 `@.+-_`
pub static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern is valid"));

/// 用户实体
///
/// 用户没有角色字段，作者或读者的身份由笔记的归属决定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户ID
    pub id: i32,
    /// 用户名，全局唯一
    pub username: String,
    /// 密码哈希，空字符串表示该用户无法通过密码登录
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 待创建的用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// 注册表单
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1 to 150 characters long."),
        regex(
            path = *USERNAME_RE,
            message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        )
    )]
    #[serde(default)]
    pub username: String,
    #[validate(length(min = 8, message = "This password is too short. It must contain at least 8 characters."))]
    #[serde(default)]
    pub password1: String,
    #[validate(must_match(other = "password1", message = "The two password fields didn't match."))]
    #[serde(default)]
    pub password2: String,
}
