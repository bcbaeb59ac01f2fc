//! Server-rendered pages.
//!
//! Plain HTML builders, no template engine. Every piece of user-influenced
//! text is escaped before interpolation.

use filedrop_core::models::{Flash, FlashLevel, User};

/// Escape text for safe interpolation into HTML.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn flash_class(level: FlashLevel) -> &'static str {
    match level {
        FlashLevel::Success => "flash flash-success",
        FlashLevel::Warning => "flash flash-warning",
        FlashLevel::Danger => "flash flash-danger",
    }
}

fn render_flashes(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="{}">{}</div>"#,
                flash_class(f.level),
                escape(&f.message)
            )
        })
        .collect()
}

fn layout(title: &str, nav: &str, flashes: &[Flash], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - filedrop</title>
</head>
<body>
<nav>{nav}</nav>
{flashes}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        nav = nav,
        flashes = render_flashes(flashes),
        body = body,
    )
}

const NAV_ANONYMOUS: &str =
    r#"<a href="/login">Login</a> <a href="/register">Register</a>"#;
const NAV_AUTHENTICATED: &str =
    r#"<a href="/upload">Upload</a> <a href="/logout">Logout</a>"#;

/// The login form.
pub fn login_page(flashes: &[Flash]) -> String {
    layout(
        "Login",
        NAV_ANONYMOUS,
        flashes,
        r#"<form method="post" action="/login">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>"#,
    )
}

/// The registration form.
pub fn register_page(flashes: &[Flash]) -> String {
    layout(
        "Register",
        NAV_ANONYMOUS,
        flashes,
        r#"<form method="post" action="/register">
<label>Full Name <input type="text" name="full_name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<label>Confirm Password <input type="password" name="confirm_password" required></label>
<button type="submit">Sign Up</button>
</form>"#,
    )
}

/// The upload form, shown only to authenticated users.
pub fn upload_page(flashes: &[Flash], user: &User) -> String {
    let body = format!(
        r#"<p>Logged in as {}</p>
<form method="post" action="/upload" enctype="multipart/form-data">
<label>Choose File <input type="file" name="file" required></label>
<label>Email <input type="text" name="emails" placeholder="comma-separated, up to 5" required></label>
<button type="submit">Upload</button>
</form>"#,
        escape(&user.email)
    );
    layout("Upload", NAV_AUTHENTICATED, flashes, &body)
}

/// Bare error page for failures no handler chose to re-render as a form.
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!("<p>{}</p>", escape(message));
    layout(&format!("Error {}", status), NAV_ANONYMOUS, &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_user_influenced_text() {
        let flashes = vec![Flash::danger("Invalid email: <script>. Try Again")];
        let html = login_page(&flashes);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn upload_page_names_the_user() {
        let user = User {
            id: uuid::Uuid::new_v4(),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "x".to_string(),
            created_at: chrono::Utc::now(),
        };
        let html = upload_page(&[], &user);
        assert!(html.contains("alice@example.com"));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
    }
}
