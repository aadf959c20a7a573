// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::errors::DomainError;
use crate::domain::repositories::RepositoryError;
use crate::presentation::pages;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 未找到的记录（包括他人的笔记）一律呈现为 404 页面。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<DomainError>() {
            return match err {
                e if e.is_not_found() => StatusCode::NOT_FOUND,
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Duplicate(_)) => StatusCode::CONFLICT,
            Some(RepositoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match status {
            StatusCode::NOT_FOUND => (status, pages::not_found()).into_response(),
            s if s.is_server_error() => {
                tracing::error!("Request failed: {:#}", self.0);
                (status, pages::server_error()).into_response()
            }
            _ => (status, pages::bad_request(&self.0.to_string())).into_response(),
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
