// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HTML 页面渲染
//!
//! 页面结构很简单，直接拼接字符串；所有用户输入都经过 `html_escape` 转义。

use axum::response::Html;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::domain::errors::FieldErrors;
use crate::domain::models::note::{Note, NoteDraft};
use crate::domain::models::user::User;
use crate::presentation::routes::names::{reverse, RouteName};

fn path(name: RouteName) -> &'static str {
    name.pattern()
}

fn note_path(name: RouteName, note: &Note) -> String {
    // slugs in storage always pass validation, fall back to the list page just in case
    reverse(name, &[note.slug.as_str()]).unwrap_or_else(|_| path(RouteName::List).to_string())
}

fn layout(title: &str, user: Option<&User>, content: &str) -> Html<String> {
    let nav = match user {
        Some(user) => format!(
            r#"<span>{}</span> <a href="{}">Заметки</a> <a href="{}">Добавить</a> <a href="{}">Выйти</a>"#,
            text(&user.username),
            path(RouteName::List),
            path(RouteName::Add),
            path(RouteName::Logout),
        ),
        None => format!(
            r#"<a href="{}">Войти</a> <a href="{}">Регистрация</a>"#,
            path(RouteName::Login),
            path(RouteName::Signup),
        ),
    };

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head><meta charset=\"utf-8\"><title>{title} | YaNote</title></head>\n\
         <body>\n<nav><a href=\"{home}\">YaNote</a> {nav}</nav>\n<main>\n{content}\n</main>\n</body>\n</html>\n",
        title = text(title),
        home = path(RouteName::Home),
        nav = nav,
        content = content,
    ))
}

fn field_errors(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .iter()
        .map(|message| format!(r#"<p class="error">{}</p>"#, text(message)))
        .collect()
}

pub fn home(user: Option<&User>) -> Html<String> {
    let content = match user {
        Some(user) => format!(
            "<h1>Привет, {}!</h1><p>Ваши заметки ждут вас.</p>",
            text(&user.username)
        ),
        None => "<h1>YaNote</h1><p>Войдите, чтобы вести заметки.</p>".to_string(),
    };
    layout("Главная", user, &content)
}

pub fn note_list(user: &User, notes: &[Note]) -> Html<String> {
    let items: String = if notes.is_empty() {
        "<p>Заметок пока нет.</p>".to_string()
    } else {
        let rows: String = notes
            .iter()
            .map(|note| {
                format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    attr(&note_path(RouteName::Detail, note)),
                    text(&note.title)
                )
            })
            .collect();
        format!("<ul>{}</ul>", rows)
    };
    layout("Заметки", Some(user), &format!("<h1>Заметки</h1>{}", items))
}

pub fn note_form(
    user: &User,
    heading: &str,
    action: &str,
    draft: &NoteDraft,
    errors: &FieldErrors,
) -> Html<String> {
    let content = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
<label>Заголовок <input name="title" value="{title}" maxlength="100"></label>{title_errors}
<label>Текст <textarea name="text">{body}</textarea></label>{text_errors}
<label>Адрес для страницы заметки <input name="slug" value="{slug}" maxlength="100"></label>{slug_errors}
<button type="submit">Сохранить</button>
</form>"#,
        heading = text(heading),
        action = attr(action),
        title = attr(&draft.title),
        title_errors = field_errors(errors, "title"),
        body = text(&draft.text),
        text_errors = field_errors(errors, "text"),
        slug = attr(&draft.slug),
        slug_errors = field_errors(errors, "slug"),
    );
    layout(heading, Some(user), &content)
}

pub fn note_detail(user: &User, note: &Note) -> Html<String> {
    let content = format!(
        r#"<h1>{}</h1><p>{}</p><a href="{}">Редактировать</a> <a href="{}">Удалить</a>"#,
        text(&note.title),
        text(&note.text),
        attr(&note_path(RouteName::Edit, note)),
        attr(&note_path(RouteName::Delete, note)),
    );
    layout(&note.title, Some(user), &content)
}

pub fn note_delete(user: &User, note: &Note) -> Html<String> {
    let content = format!(
        r#"<h1>Удалить заметку «{}»?</h1>
<form method="post" action="{}"><button type="submit">Удалить</button></form>"#,
        text(&note.title),
        attr(&note_path(RouteName::Delete, note)),
    );
    layout("Удаление заметки", Some(user), &content)
}

pub fn success(user: &User) -> Html<String> {
    let content = format!(
        r#"<h1>Успешно!</h1><p><a href="{}">К списку заметок</a></p>"#,
        path(RouteName::List)
    );
    layout("Успешно", Some(user), &content)
}

pub fn login_form(
    user: Option<&User>,
    username: &str,
    next: &str,
    error: Option<&str>,
) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, text(e)))
        .unwrap_or_default();
    let content = format!(
        r#"<h1>Вход</h1>{error}
<form method="post" action="{action}">
<label>Имя пользователя <input name="username" value="{username}"></label>
<label>Пароль <input type="password" name="password"></label>
<input type="hidden" name="next" value="{next}">
<button type="submit">Войти</button>
</form>"#,
        error = error,
        action = path(RouteName::Login),
        username = attr(username),
        next = attr(next),
    );
    layout("Вход", user, &content)
}

pub fn logged_out() -> Html<String> {
    let content = format!(
        r#"<h1>Вы вышли из системы</h1><p><a href="{}">Войти снова</a></p>"#,
        path(RouteName::Login)
    );
    layout("Выход", None, &content)
}

pub fn signup_form(user: Option<&User>, username: &str, errors: &FieldErrors) -> Html<String> {
    let content = format!(
        r#"<h1>Регистрация</h1>
<form method="post" action="{action}">
<label>Имя пользователя <input name="username" value="{username}" maxlength="150"></label>{username_errors}
<label>Пароль <input type="password" name="password1"></label>{password1_errors}
<label>Подтверждение пароля <input type="password" name="password2"></label>{password2_errors}
<button type="submit">Зарегистрироваться</button>
</form>"#,
        action = path(RouteName::Signup),
        username = attr(username),
        username_errors = field_errors(errors, "username"),
        password1_errors = field_errors(errors, "password1"),
        password2_errors = field_errors(errors, "password2"),
    );
    layout("Регистрация", user, &content)
}

pub fn not_found() -> Html<String> {
    layout("Не найдено", None, "<h1>Страница не найдена</h1>")
}

pub fn server_error() -> Html<String> {
    layout("Ошибка", None, "<h1>Внутренняя ошибка сервера</h1>")
}

pub fn bad_request(message: &str) -> Html<String> {
    layout(
        "Некорректный запрос",
        None,
        &format!("<h1>Некорректный запрос</h1><p>{}</p>", text(message)),
    )
}
