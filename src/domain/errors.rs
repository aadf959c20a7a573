// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::RepositoryError;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

/// 表单字段错误集合
///
/// 以字段名为键，保存需要回显给用户的错误消息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只包含一条错误的集合
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// 指定字段的错误消息，没有错误时返回空切片
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", err.code));
                fields.add(&field.to_string(), message);
            }
        }
        fields
    }
}

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 表单校验失败
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// 记录不存在，或者不属于当前用户
    #[error("record not found")]
    NotFound,
    /// 用户名或密码错误
    #[error("invalid username or password")]
    InvalidCredentials,
    /// 仓库错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// 内部错误
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// 是否应当以“未找到”的形式呈现
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound | DomainError::Repository(RepositoryError::NotFound)
        )
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors.into())
    }
}
