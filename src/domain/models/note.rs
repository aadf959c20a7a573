// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 标题最大长度
pub const MAX_TITLE_LENGTH: u64 = 100;
/// slug 最大长度
pub const MAX_SLUG_LENGTH: usize = 100;

/// slug 允许的字符，空值表示由标题自动生成
pub static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]*$").expect("slug pattern is valid"));

/// 笔记实体
///
/// 笔记只对作者可见。`slug` 是详情、编辑和删除页面地址中的查找键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// 笔记ID
    pub id: i32,
    /// 标题
    pub title: String,
    /// 正文
    pub text: String,
    /// 页面地址，全局唯一
    pub slug: String,
    /// 作者ID
    pub author_id: i32,
}

/// 待持久化的新笔记
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i32,
}

/// 笔记表单
///
/// 新建和编辑共用，`slug` 留空时由标题生成
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct NoteDraft {
    #[validate(length(min = 1, max = 100, message = "Title must be 1 to 100 characters long."))]
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1, message = "This field is required."))]
    #[serde(default)]
    pub text: String,
    #[validate(
        length(max = 100, message = "Slug must be at most 100 characters long."),
        regex(
            path = *SLUG_RE,
            message = "Enter a valid slug consisting of letters, numbers, underscores or hyphens."
        )
    )]
    #[serde(default)]
    pub slug: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            slug: String::new(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
        }
    }
}
