//! Admin dashboard access.

use lara_integration_tests::{TestApp, location};

#[tokio::test]
async fn test_admin_requires_admin_role() {
    let app = TestApp::spawn().await;

    let resp = app.get("/admin").await;
    assert!(location(&resp).starts_with("/auth/login"));

    app.login("sarah@example.com").await;
    let resp = app.get("/admin").await;
    assert_eq!(resp.status().as_u16(), 303);
}

#[tokio::test]
async fn test_admin_dashboard() {
    let app = TestApp::spawn().await;
    app.login("admin@lara.com").await;

    let (status, body) = app.get_page("/admin").await;
    assert_eq!(status, 200);
    assert!(body.contains("Administrator"));
    assert!(body.contains("Recent orders"));
    assert!(body.contains("Low stock"));
    assert!(body.contains("Jasmine Noir"));
}
