// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::info;

use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::models::user::SignupForm;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::MaybeUser;
use crate::presentation::pages;
use crate::presentation::redirect::{found, is_safe_next};
use crate::presentation::routes::names::RouteName;
use crate::presentation::state::AppState;

const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    #[serde(default)]
    pub next: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub next: String,
}

/// 登录页
pub async fn login_page(
    MaybeUser(user): MaybeUser,
    Query(query): Query<NextQuery>,
) -> Html<String> {
    pages::login_form(user.as_ref(), "", &query.next, None)
}

/// 提交登录
///
/// 成功时写入会话 Cookie，并跳转到安全的 `next` 或配置的默认地址
pub async fn login(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let account = match state.users.authenticate(&form.username, &form.password).await {
        Ok(account) => account,
        Err(DomainError::InvalidCredentials) => {
            return Ok(pages::login_form(
                user.as_ref(),
                &form.username,
                &form.next,
                Some(INVALID_LOGIN),
            )
            .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    // replace any session the client already holds
    if let Some(previous) = jar.get(state.session_cookie_name()) {
        state.sessions.close(previous.value()).await?;
    }
    let session = state.sessions.open(account.id).await?;
    info!("User {} logged in", account.username);

    let target = if is_safe_next(&form.next) {
        form.next.as_str()
    } else {
        state.settings.auth.login_redirect.as_str()
    };

    let mut cookie = Cookie::new(state.session_cookie_name().to_string(), session.token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);

    Ok((jar.add(cookie), found(target)).into_response())
}

/// 退出登录，GET 与 POST 均可
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let name = state.session_cookie_name().to_string();
    let token = jar.get(&name).map(|cookie| cookie.value().to_string());

    let jar = match token {
        Some(token) => {
            state.sessions.close(&token).await?;
            info!("Session closed");
            let mut removal = Cookie::new(name, "");
            removal.set_path("/");
            jar.remove(removal)
        }
        None => jar,
    };

    Ok((jar, pages::logged_out()).into_response())
}

/// 注册页
pub async fn signup_page(MaybeUser(user): MaybeUser) -> Html<String> {
    pages::signup_form(user.as_ref(), "", &FieldErrors::new())
}

/// 提交注册，成功后跳转到登录页
pub async fn signup(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let username = form.username.clone();
    match state.users.signup(form).await {
        Ok(_) => Ok(found(RouteName::Login.pattern())),
        Err(DomainError::Validation(errors)) => {
            Ok(pages::signup_form(user.as_ref(), &username, &errors).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
