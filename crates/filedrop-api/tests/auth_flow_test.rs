//! Registration, login, logout, and route gating.

mod helpers;

use helpers::{login, register, register_and_login, setup_test_app};

#[tokio::test]
async fn register_then_login_reaches_the_upload_page() {
    let app = setup_test_app().await;

    let response = app
        .server
        .post("/register")
        .form(&[
            ("full_name", "Alice Example"),
            ("email", "alice@example.com"),
            ("password", "pw123"),
            ("confirm_password", "pw123"),
        ])
        .await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");

    // The success flash shows on the login page.
    let login_page = app.server.get("/login").await;
    assert!(login_page
        .text()
        .contains("You have been registered successfully!"));

    login(&app, "alice@example.com", "pw123").await;

    let upload_page = app.server.get("/upload").await;
    assert_eq!(upload_page.status_code(), 200);
    assert!(upload_page.text().contains("alice@example.com"));
    assert!(upload_page.text().contains("You have been logged in!"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_a_second_record() {
    let app = setup_test_app().await;
    register(&app, "Alice Example", "alice@example.com", "pw123").await;

    let response = app
        .server
        .post("/register")
        .form(&[
            ("full_name", "Other Alice"),
            ("email", "alice@example.com"),
            ("password", "pw456"),
            ("confirm_password", "pw456"),
        ])
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("Email already exists"));
    assert_eq!(app.users.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn mismatched_passwords_are_rejected() {
    let app = setup_test_app().await;

    let response = app
        .server
        .post("/register")
        .form(&[
            ("full_name", "Alice Example"),
            ("email", "alice@example.com"),
            ("password", "pw123"),
            ("confirm_password", "pw124"),
        ])
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("Passwords do not match"));
    assert!(app.users.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = setup_test_app().await;
    register(&app, "Alice Example", "alice@example.com", "pw123").await;

    let response = app
        .server
        .post("/login")
        .form(&[("email", "alice@example.com"), ("password", "wrong")])
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("Invalid password. Try Again"));
}

#[tokio::test]
async fn unknown_email_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .server
        .post("/login")
        .form(&[("email", "ghost@example.com"), ("password", "pw123")])
        .await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("Invalid email. Try Again"));
}

#[tokio::test]
async fn root_redirects_by_session_state() {
    let app = setup_test_app().await;

    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");

    register_and_login(&app, "alice@example.com", "pw123").await;

    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/upload");
}

#[tokio::test]
async fn protected_routes_redirect_unauthenticated_users_to_login() {
    let app = setup_test_app().await;

    for path in ["/upload", "/logout"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), 303, "{} should redirect", path);
        assert_eq!(response.header("location"), "/login");
    }

    let login_page = app.server.get("/login").await;
    assert!(login_page.text().contains("You must be logged in"));
}

#[tokio::test]
async fn authenticated_get_register_redirects_with_warning() {
    let app = setup_test_app().await;
    register_and_login(&app, "alice@example.com", "pw123").await;

    let response = app.server.get("/register").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/upload");

    let upload_page = app.server.get("/upload").await;
    assert!(upload_page
        .text()
        .contains("You are already logged in. Please log out first."));
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let app = setup_test_app().await;
    register_and_login(&app, "alice@example.com", "pw123").await;

    let response = app.server.get("/logout").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");

    let login_page = app.server.get("/login").await;
    assert!(login_page.text().contains("You have been logged out!"));

    // The session no longer grants access to protected routes.
    let response = app.server.get("/upload").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");
}
