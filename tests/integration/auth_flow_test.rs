// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 注册、登录与退出流程测试

use super::helpers::{cookie_pair, location, spawn_app};
use axum::http::StatusCode;

const PASSWORD: &str = "надёжный-пароль";

#[tokio::test]
async fn test_signup_login_and_return_to_next() {
    let app = spawn_app().await;

    let signup = app
        .post_form(
            "/auth/signup/",
            None,
            &[("username", "poet"), ("password1", PASSWORD), ("password2", PASSWORD)],
        )
        .await;
    assert_eq!(signup.status_code(), StatusCode::FOUND);
    assert_eq!(location(&signup), "/auth/login/");

    let login = app
        .post_form(
            "/auth/login/",
            None,
            &[("username", "poet"), ("password", PASSWORD), ("next", "/notes/")],
        )
        .await;
    assert_eq!(login.status_code(), StatusCode::FOUND);
    assert_eq!(location(&login), "/notes/");

    let set_cookie = login.header("set-cookie");
    let cookie = cookie_pair(set_cookie.to_str().unwrap());
    assert!(cookie.starts_with("sessionid="));

    let list = app.get("/notes/", Some(cookie.as_str())).await;
    assert_eq!(list.status_code(), StatusCode::OK);
    assert!(list.text().contains("poet"));
}

#[tokio::test]
async fn test_login_page_keeps_next() {
    let app = spawn_app().await;

    let response = app.get("/auth/login/?next=/notes/", None).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .text()
        .contains(r#"<input type="hidden" name="next" value="/notes/">"#));
}

#[tokio::test]
async fn test_wrong_password_rerenders_login() {
    let app = spawn_app().await;
    app.state
        .users
        .create_user("poet", Some(PASSWORD))
        .await
        .unwrap();

    let response = app
        .post_form(
            "/auth/login/",
            None,
            &[("username", "poet"), ("password", "wrong"), ("next", "/notes/")],
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.maybe_header("set-cookie").is_none());
    assert!(response.text().contains("Please enter a correct username and password"));
}

#[tokio::test]
async fn test_user_without_password_cannot_log_in() {
    let app = spawn_app().await;

    let response = app
        .post_form(
            "/auth/login/",
            None,
            &[("username", app.author.username.as_str()), ("password", "")],
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.maybe_header("set-cookie").is_none());
}

#[tokio::test]
async fn test_unsafe_next_falls_back_to_default() {
    let app = spawn_app().await;
    app.state
        .users
        .create_user("poet", Some(PASSWORD))
        .await
        .unwrap();

    for next in [
        "//evil.example/",
        "https://evil.example/",
        "/\t/evil.example/",
        "/\n/evil.example/",
        "",
    ] {
        let response = app
            .post_form(
                "/auth/login/",
                None,
                &[("username", "poet"), ("password", PASSWORD), ("next", next)],
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::FOUND, "{}", next);
        assert_eq!(location(&response), "/", "{}", next);
    }
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = spawn_app().await;
    let cookie = app.reader_cookie.as_str();

    assert_eq!(
        app.get("/notes/", Some(cookie)).await.status_code(),
        StatusCode::OK
    );

    let logout = app.get("/auth/logout/", Some(cookie)).await;
    assert_eq!(logout.status_code(), StatusCode::OK);

    let after = app.get("/notes/", Some(cookie)).await;
    assert_eq!(after.status_code(), StatusCode::FOUND);
    assert_eq!(location(&after), "/auth/login/?next=/notes/");
}

#[tokio::test]
async fn test_unknown_session_cookie_is_anonymous() {
    let app = spawn_app().await;

    let response = app.get("/notes/", Some("sessionid=deadbeef")).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let home = app.get("/", Some("sessionid=deadbeef")).await;
    assert_eq!(home.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_validation_rerenders_form() {
    let app = spawn_app().await;

    let mismatch = app
        .post_form(
            "/auth/signup/",
            None,
            &[("username", "poet"), ("password1", PASSWORD), ("password2", "другой-пароль")],
        )
        .await;
    assert_eq!(mismatch.status_code(), StatusCode::OK);
    assert!(mismatch.text().contains("The two password fields didn"));

    let taken = app
        .post_form(
            "/auth/signup/",
            None,
            &[("username", "Анон"), ("password1", PASSWORD), ("password2", PASSWORD)],
        )
        .await;
    assert_eq!(taken.status_code(), StatusCode::OK);
    assert!(taken.text().contains("A user with that username already exists."));
}
