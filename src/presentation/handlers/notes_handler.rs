// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::models::note::NoteDraft;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::{CurrentUser, MaybeUser};
use crate::presentation::pages;
use crate::presentation::redirect::found;
use crate::presentation::routes::names::{reverse, RouteName};
use crate::presentation::state::AppState;

/// 首页，所有人可访问
pub async fn home(MaybeUser(user): MaybeUser) -> Html<String> {
    pages::home(user.as_ref())
}

/// 当前用户的笔记列表
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    let notes = state.notes.list_for(user.id).await?;
    Ok(pages::note_list(&user, &notes))
}

/// 新建笔记表单
pub async fn add_page(CurrentUser(user): CurrentUser) -> Html<String> {
    pages::note_form(
        &user,
        "Новая заметка",
        RouteName::Add.pattern(),
        &NoteDraft::default(),
        &FieldErrors::new(),
    )
}

/// 提交新建笔记
///
/// 成功后跳转到成功页；表单不合法时带着错误重新渲染
pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(draft): Form<NoteDraft>,
) -> Result<Response, AppError> {
    match state.notes.create(user.id, draft.clone()).await {
        Ok(_) => Ok(found(RouteName::Success.pattern())),
        Err(DomainError::Validation(errors)) => Ok(pages::note_form(
            &user,
            "Новая заметка",
            RouteName::Add.pattern(),
            &draft,
            &errors,
        )
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// 操作成功页
pub async fn success(CurrentUser(user): CurrentUser) -> Html<String> {
    pages::success(&user)
}

/// 笔记详情，仅作者可见
pub async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = state.notes.get_owned(user.id, &slug).await?;
    Ok(pages::note_detail(&user, &note))
}

/// 编辑表单，仅作者可见
pub async fn edit_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = state.notes.get_owned(user.id, &slug).await?;
    let action = reverse(RouteName::Edit, &[note.slug.as_str()])?;
    Ok(pages::note_form(
        &user,
        "Редактирование заметки",
        &action,
        &NoteDraft::from(&note),
        &FieldErrors::new(),
    ))
}

/// 提交编辑
pub async fn edit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    Form(draft): Form<NoteDraft>,
) -> Result<Response, AppError> {
    match state.notes.update_owned(user.id, &slug, draft.clone()).await {
        Ok(_) => Ok(found(RouteName::Success.pattern())),
        Err(DomainError::Validation(errors)) => {
            let action = reverse(RouteName::Edit, &[slug.as_str()])?;
            Ok(
                pages::note_form(&user, "Редактирование заметки", &action, &draft, &errors)
                    .into_response(),
            )
        }
        Err(e) => Err(e.into()),
    }
}

/// 删除确认页，仅作者可见
pub async fn delete_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = state.notes.get_owned(user.id, &slug).await?;
    Ok(pages::note_delete(&user, &note))
}

/// 确认删除
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    state.notes.delete_owned(user.id, &slug).await?;
    Ok(found(RouteName::Success.pattern()))
}
