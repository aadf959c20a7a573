// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! SeaORM 仓库实现测试

use super::helpers::test_state;
use chrono::{Duration, Utc};
use yanote::domain::models::note::{NewNote, Note};
use yanote::domain::models::session::Session;
use yanote::domain::models::user::NewUser;
use yanote::domain::repositories::note_repository::NoteRepository;
use yanote::domain::repositories::session_repository::SessionRepository;
use yanote::domain::repositories::user_repository::UserRepository;
use yanote::domain::repositories::RepositoryError;
use yanote::infrastructure::repositories::note_repo_impl::NoteRepositoryImpl;
use yanote::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use yanote::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;

#[tokio::test]
async fn test_note_repository_round_trip() {
    let (_state, db) = test_state().await;
    let users = UserRepositoryImpl::new(db.clone());
    let notes = NoteRepositoryImpl::new(db.clone());

    let author = users
        .create(&NewUser {
            username: "author".to_string(),
            password_hash: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(
        users.find_by_username("author").await.unwrap().map(|u| u.id),
        Some(author.id)
    );

    let created = notes
        .create(&NewNote {
            title: "Title".to_string(),
            text: "Text".to_string(),
            slug: "title".to_string(),
            author_id: author.id,
        })
        .await
        .unwrap();

    let duplicate = notes
        .create(&NewNote {
            title: "Other".to_string(),
            text: "Text".to_string(),
            slug: "title".to_string(),
            author_id: author.id,
        })
        .await;
    assert!(matches!(duplicate, Err(RepositoryError::Duplicate(_))));

    assert!(notes.slug_exists("title", None).await.unwrap());
    assert!(!notes.slug_exists("title", Some(created.id)).await.unwrap());
    assert!(!notes.slug_exists("other", None).await.unwrap());

    assert!(notes
        .find_by_author_and_slug(author.id + 1, "title")
        .await
        .unwrap()
        .is_none());

    let updated = notes
        .update(&Note {
            title: "Changed".to_string(),
            ..created.clone()
        })
        .await
        .unwrap();
    assert_eq!(updated.title, "Changed");

    notes.delete(created.id).await.unwrap();
    assert!(matches!(
        notes.delete(created.id).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(notes.list_by_author(author.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_session_repository_expiry() {
    let (_state, db) = test_state().await;
    let users = UserRepositoryImpl::new(db.clone());
    let sessions = SessionRepositoryImpl::new(db.clone());

    let user = users
        .create(&NewUser {
            username: "reader".to_string(),
            password_hash: String::new(),
        })
        .await
        .unwrap();

    let now = Utc::now();
    for (token, offset) in [("live", Duration::hours(1)), ("stale", Duration::hours(-1))] {
        sessions
            .create(&Session {
                token: token.to_string(),
                user_id: user.id,
                expires_at: now + offset,
            })
            .await
            .unwrap();
    }

    assert_eq!(sessions.delete_expired(now).await.unwrap(), 1);
    assert!(sessions.find("live").await.unwrap().is_some());
    assert!(sessions.find("stale").await.unwrap().is_none());

    sessions.delete("live").await.unwrap();
    sessions.delete("live").await.unwrap();
    assert!(sessions.find("live").await.unwrap().is_none());
}
