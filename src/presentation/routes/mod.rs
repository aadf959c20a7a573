// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{notes_handler, users_handler};
use crate::presentation::middleware::login_required::login_required;
use crate::presentation::middleware::session_middleware::session_middleware;
use crate::presentation::pages;
use crate::presentation::state::AppState;
use axum::{
    http::StatusCode,
    middleware,
    response::Html,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub mod names;


use names::RouteName;

/// 创建应用路由
///
/// 公开页面直接挂载；需要登录的页面统一经过登录检查中间件，
/// 是否为作者由各处理器通过作者范围的查询判断。
/// 会话中间件包在最外层，为所有请求识别当前用户。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(RouteName::Home.pattern(), get(notes_handler::home))
        .route(
            RouteName::Login.pattern(),
            get(users_handler::login_page).post(users_handler::login),
        )
        .route(
            RouteName::Logout.pattern(),
            get(users_handler::logout).post(users_handler::logout),
        )
        .route(
            RouteName::Signup.pattern(),
            get(users_handler::signup_page).post(users_handler::signup),
        );

    let protected_routes = Router::new()
        .route(
            RouteName::Add.pattern(),
            get(notes_handler::add_page).post(notes_handler::add),
        )
        .route(RouteName::List.pattern(), get(notes_handler::list))
        .route(RouteName::Success.pattern(), get(notes_handler::success))
        .route(RouteName::Detail.pattern(), get(notes_handler::detail))
        .route(
            RouteName::Edit.pattern(),
            get(notes_handler::edit_page).post(notes_handler::edit),
        )
        .route(
            RouteName::Delete.pattern(),
            get(notes_handler::delete_page).post(notes_handler::delete),
        )
        .route_layer(middleware::from_fn(login_required));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, pages::not_found())
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
