// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::note::MAX_SLUG_LENGTH;

/// 由标题生成 slug
///
/// 先音译为 ASCII（"Заголовок" → "Zagolovok"），再转小写，丢弃
/// `[a-z0-9_-]` 和空白以外的字符，把连续的空白与连字符合并为一个 `-`，
/// 去掉首尾的 `-` 和 `_`，最后截断到 [`MAX_SLUG_LENGTH`]。
///
/// 结果可能为空字符串，例如标题全部由标点组成时。
pub fn slugify(title: &str) -> String {
    let ascii = deunicode::deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for ch in ascii.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    let trimmed = slug.trim_matches(|c| c == '-' || c == '_');
    // ASCII only, so byte truncation is on a char boundary
    let truncated = &trimmed[..trimmed.len().min(MAX_SLUG_LENGTH)];
    truncated.trim_end_matches('-').to_string()
}
