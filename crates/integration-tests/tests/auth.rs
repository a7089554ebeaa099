//! Mock sign-in, registration and sign-out.

use lara_integration_tests::{TestApp, location};

#[tokio::test]
async fn test_login_page_renders() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/auth/login").await;
    assert_eq!(status, 200);
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("name=\"password\""));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/auth/login", &[("email", "not-an-email"), ("password", "x")])
        .await;
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(location(&resp), "/auth/login?error=credentials");

    let (_, body) = app.get_page("/auth/login?error=credentials").await;
    assert!(body.contains("Invalid credentials. Please try again."));

    let resp = app
        .post_form("/auth/login", &[("email", "sarah@example.com"), ("password", "  ")])
        .await;
    assert_eq!(location(&resp), "/auth/login?error=credentials");
}

#[tokio::test]
async fn test_login_then_logout() {
    let app = TestApp::spawn().await;
    app.login("sarah.johnson@example.com").await;

    let (status, body) = app.get_page("/dashboard").await;
    assert_eq!(status, 200);
    assert!(body.contains("Welcome back, Sarah!"));

    // Signed-in visitors skip the login page.
    let resp = app.get("/auth/login").await;
    assert_eq!(location(&resp), "/dashboard");

    let resp = app.post_form("/auth/logout", &[]).await;
    assert_eq!(location(&resp), "/");

    let resp = app.get("/dashboard").await;
    assert_eq!(resp.status().as_u16(), 303);
    assert!(location(&resp).starts_with("/auth/login"));
}

#[tokio::test]
async fn test_login_honors_local_next_only() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/auth/login",
            &[
                ("email", "sarah@example.com"),
                ("password", "secret"),
                ("next", "/dashboard/orders"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard/orders");

    let other = TestApp::spawn().await;
    let resp = other
        .post_form(
            "/auth/login",
            &[
                ("email", "sarah@example.com"),
                ("password", "secret"),
                ("next", "https://evil.example/"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard");
}

#[tokio::test]
async fn test_register() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/auth/register",
            &[
                ("first_name", "Dewi"),
                ("last_name", "Lestari"),
                ("email", "dewi@example.com"),
                ("password", "password123"),
                ("password_confirm", "password124"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/auth/register?error=password_mismatch");

    let resp = app
        .post_form(
            "/auth/register",
            &[
                ("first_name", "Dewi"),
                ("last_name", "Lestari"),
                ("email", "dewi@example.com"),
                ("password", "password123"),
                ("password_confirm", "password123"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard");

    let (_, body) = app.get_page("/dashboard/settings").await;
    assert!(body.contains("value=\"Dewi\""));
    assert!(body.contains("value=\"dewi@example.com\""));
}

#[tokio::test]
async fn test_logout_keeps_the_cart() {
    let app = TestApp::spawn().await;
    app.login("sarah@example.com").await;
    app.post_form("/cart/add", &[("product_id", "2")]).await;

    app.post_form("/auth/logout", &[]).await;

    let (_, badge) = app.get_page("/cart/count").await;
    assert!(badge.contains(">1</span>"));
}

#[tokio::test]
async fn test_rate_limit_only_covers_form_posts() {
    let app = TestApp::spawn().await;

    for _ in 0..8 {
        let (status, _) = app.get_page("/auth/login").await;
        assert_eq!(status, 200);
    }

    let mut statuses = Vec::new();
    for _ in 0..6 {
        let resp = app
            .post_form("/auth/login", &[("email", "nope"), ("password", "x")])
            .await;
        statuses.push(resp.status().as_u16());
    }
    assert_eq!(statuses, [303, 303, 303, 303, 303, 429]);

    let resp = app.post_form("/auth/logout", &[]).await;
    assert_eq!(location(&resp), "/");
}
