// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::{TestResponse, TestServer};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use yanote::config::settings::Settings;
use yanote::domain::models::note::{Note, NoteDraft};
use yanote::domain::models::user::User;
use yanote::infrastructure::database::connection;
use yanote::presentation::routes;
use yanote::presentation::state::AppState;

pub const AUTHOR_NAME: &str = "Сергей Есенин";
pub const READER_NAME: &str = "Анон";

/// 测试应用
///
/// 对应一组固定数据：作者、作者的一条笔记、另一位读者，以及两人各自已登录的会话
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub db: Arc<DatabaseConnection>,
    pub author: User,
    pub reader: User,
    pub note: Note,
    pub author_cookie: String,
    pub reader_cookie: String,
}

/// 测试配置：内存数据库，较低的 Argon2 开销
pub fn test_settings() -> Settings {
    Settings::with_overrides(&[
        ("database.url", "sqlite::memory:"),
        ("auth.password_memory_kib", "256"),
        ("auth.password_time_cost", "1"),
    ])
    .expect("test settings should load")
}

pub async fn test_state() -> (AppState, Arc<DatabaseConnection>) {
    let settings = Arc::new(test_settings());
    let db = Arc::new(
        connection::create_pool(&settings.database)
            .await
            .expect("Failed to connect to in-memory database"),
    );
    connection::run_migrations(db.as_ref())
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(db.clone(), settings).expect("Failed to build app state");
    (state, db)
}

pub async fn spawn_app() -> TestApp {
    let (state, db) = test_state().await;

    let author = state.users.create_user(AUTHOR_NAME, None).await.unwrap();
    let note = state
        .notes
        .create(author.id, NoteDraft::new("Заголовок", "Текст"))
        .await
        .unwrap();
    let reader = state.users.create_user(READER_NAME, None).await.unwrap();

    // log both users in without a password
    let author_cookie = session_cookie(&state, author.id).await;
    let reader_cookie = session_cookie(&state, reader.id).await;

    let server = TestServer::new(routes::router(state.clone())).unwrap();

    TestApp {
        server,
        state,
        db,
        author,
        reader,
        note,
        author_cookie,
        reader_cookie,
    }
}

pub async fn session_cookie(state: &AppState, user_id: i32) -> String {
    let session = state.sessions.open(user_id).await.unwrap();
    format!("{}={}", state.session_cookie_name(), session.token)
}

/// 从 Set-Cookie 头中取出 `name=value` 部分
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}

impl TestApp {
    pub async fn get(&self, url: &str, cookie: Option<&str>) -> TestResponse {
        let request = self.server.get(url);
        match cookie {
            Some(cookie) => request.add_header("Cookie", cookie.to_string()).await,
            None => request.await,
        }
    }

    pub async fn post_form<F: Serialize + ?Sized>(
        &self,
        url: &str,
        cookie: Option<&str>,
        form: &F,
    ) -> TestResponse {
        let request = self.server.post(url).form(form);
        match cookie {
            Some(cookie) => request.add_header("Cookie", cookie.to_string()).await,
            None => request.await,
        }
    }
}

pub fn location(response: &TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("location header is ascii")
        .to_string()
}
