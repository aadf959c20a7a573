// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 路由可用性与访问控制测试

use super::helpers::{location, session_cookie, spawn_app};
use axum::http::StatusCode;
use yanote::presentation::redirect::login_url_with_next;
use yanote::presentation::routes::names::{reverse, reverse_name, AccessTier, RouteName};

const URLS_FOR_ANONYMOUS_ACCESS: [&str; 4] =
    ["notes:home", "users:login", "users:logout", "users:signup"];
const URLS_FOR_AUTHOR_ACCESS: [&str; 3] = ["notes:add", "notes:list", "notes:success"];
const URLS_FOR_AUTHOR_ONLY: [&str; 3] = ["notes:detail", "notes:edit", "notes:delete"];

/// 首页、注册、登录和退出页面对匿名用户开放
#[tokio::test]
async fn test_pages_availability() {
    let app = spawn_app().await;

    for name in URLS_FOR_ANONYMOUS_ACCESS {
        let url = reverse_name(name, &[]).unwrap();
        let response = app.get(&url, None).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{}", name);
    }
}

/// 公开页面对已登录的非作者同样开放，退出页放在最后
#[tokio::test]
async fn test_pages_availability_for_logged_in_reader() {
    let app = spawn_app().await;

    for name in ["notes:home", "users:login", "users:signup", "users:logout"] {
        let url = reverse_name(name, &[]).unwrap();
        let response = app.get(&url, Some(app.reader_cookie.as_str())).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{}", name);
    }

    // the reader is logged out now
    let list = app.get("/notes/", Some(app.reader_cookie.as_str())).await;
    assert_eq!(list.status_code(), StatusCode::FOUND);
}

/// 笔记详情、编辑和删除页面只对作者开放，其他用户得到 404
#[tokio::test]
async fn test_availability_for_note_show_and_edit_and_delete() {
    let app = spawn_app().await;
    let users_statuses = [
        (&app.author_cookie, StatusCode::OK),
        (&app.reader_cookie, StatusCode::NOT_FOUND),
    ];

    for (cookie, status) in users_statuses {
        for name in URLS_FOR_AUTHOR_ONLY {
            let url = reverse_name(name, &[app.note.slug.as_str()]).unwrap();
            let response = app.get(&url, Some(cookie.as_str())).await;
            assert_eq!(response.status_code(), status, "{} with {}", name, cookie);
        }
    }
}

/// 已登录用户可以访问列表页、添加页和成功页
#[tokio::test]
async fn test_availability_for_note_add_and_list() {
    let app = spawn_app().await;

    for cookie in [&app.author_cookie, &app.reader_cookie] {
        for name in URLS_FOR_AUTHOR_ACCESS {
            let url = reverse_name(name, &[]).unwrap();
            let response = app.get(&url, Some(cookie.as_str())).await;
            assert_eq!(response.status_code(), StatusCode::OK, "{}", name);
        }
    }
}

/// 匿名用户访问受保护页面时被重定向到带 next 参数的登录页
#[tokio::test]
async fn test_redirect_for_anonymous_client() {
    let app = spawn_app().await;
    let login_url = reverse(RouteName::Login, &[]).unwrap();

    let mut urls: Vec<String> = URLS_FOR_AUTHOR_ONLY
        .iter()
        .map(|name| reverse_name(name, &[app.note.slug.as_str()]).unwrap())
        .collect();
    urls.extend(
        URLS_FOR_AUTHOR_ACCESS
            .iter()
            .map(|name| reverse_name(name, &[]).unwrap()),
    );

    for url in urls {
        let redirect_url = format!("{}?next={}", login_url, url);
        let response = app.get(&url, None).await;

        assert_eq!(response.status_code(), StatusCode::FOUND, "{}", url);
        assert_eq!(location(&response), redirect_url);

        // the login page itself must answer, like following the redirect chain
        let login_page = app.get(&redirect_url, None).await;
        assert_eq!(login_page.status_code(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_note_edit_scenario() {
    let app = spawn_app().await;
    assert_eq!(app.note.slug, "zagolovok");
    assert_eq!(app.author.username, "Сергей Есенин");
    assert_eq!(app.reader.username, "Анон");

    let url = reverse(RouteName::Edit, &[app.note.slug.as_str()]).unwrap();

    let reader_response = app.get(&url, Some(app.reader_cookie.as_str())).await;
    assert_eq!(reader_response.status_code(), StatusCode::NOT_FOUND);

    let author_response = app.get(&url, Some(app.author_cookie.as_str())).await;
    assert_eq!(author_response.status_code(), StatusCode::OK);
    assert!(author_response.text().contains("Заголовок"));
}

#[tokio::test]
async fn test_anonymous_list_redirect_location() {
    let app = spawn_app().await;

    let response = app.get("/notes/", None).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(location(&response), "/auth/login/?next=/notes/");
}

/// 他人的笔记和不存在的笔记对读者来说不可区分
#[tokio::test]
async fn test_foreign_note_looks_like_missing_note() {
    let app = spawn_app().await;

    let reader = Some(app.reader_cookie.as_str());

    let foreign = app
        .get(&reverse(RouteName::Detail, &[app.note.slug.as_str()]).unwrap(), reader)
        .await;
    let missing = app
        .get(&reverse(RouteName::Detail, &["no-such-note"]).unwrap(), reader)
        .await;

    assert_eq!(foreign.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(foreign.text(), missing.text());
}

#[tokio::test]
async fn test_every_named_route_is_served_per_its_tier() {
    let app = spawn_app().await;

    for name in RouteName::ALL {
        let args: Vec<&str> = match name.access_tier() {
            AccessTier::OwnerOnly => vec![app.note.slug.as_str()],
            _ => vec![],
        };
        let url = reverse(name, &args).unwrap();

        // logout ends the session it is called with, so give it throwaway ones
        let (reader_cookie, author_cookie) = if name == RouteName::Logout {
            (
                session_cookie(&app.state, app.reader.id).await,
                session_cookie(&app.state, app.author.id).await,
            )
        } else {
            (app.reader_cookie.clone(), app.author_cookie.clone())
        };

        let anonymous = app.get(&url, None).await;
        let reader = app.get(&url, Some(reader_cookie.as_str())).await;
        let author = app.get(&url, Some(author_cookie.as_str())).await;

        match name.access_tier() {
            AccessTier::Public => {
                assert_eq!(anonymous.status_code(), StatusCode::OK, "{}", name);
                assert_eq!(reader.status_code(), StatusCode::OK, "{}", name);
                assert_eq!(author.status_code(), StatusCode::OK, "{}", name);
            }
            AccessTier::Authenticated => {
                assert_eq!(location(&anonymous), login_url_with_next(&url), "{}", name);
                assert_eq!(reader.status_code(), StatusCode::OK, "{}", name);
                assert_eq!(author.status_code(), StatusCode::OK, "{}", name);
            }
            AccessTier::OwnerOnly => {
                assert_eq!(location(&anonymous), login_url_with_next(&url), "{}", name);
                assert_eq!(reader.status_code(), StatusCode::NOT_FOUND, "{}", name);
                assert_eq!(author.status_code(), StatusCode::OK, "{}", name);
            }
        }
    }
}

#[tokio::test]
async fn test_unknown_path_is_404_for_everyone() {
    let app = spawn_app().await;

    assert_eq!(app.get("/nowhere/", None).await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.get("/nowhere/", Some(app.author_cookie.as_str())).await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let response = app.get("/health", None).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_version() {
    let app = spawn_app().await;

    let response = app.get("/version", None).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}
