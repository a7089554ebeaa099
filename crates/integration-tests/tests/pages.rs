//! About, contact and newsletter.

use lara_integration_tests::TestApp;

#[tokio::test]
async fn test_about_page() {
    let (status, body) = TestApp::spawn().await.get_page("/about").await;
    assert_eq!(status, 200);
    assert!(body.contains("Our Story"));
    assert!(body.contains("Meet the team"));
}

#[tokio::test]
async fn test_contact_form() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/contact").await;
    assert_eq!(status, 200);
    assert!(body.contains("Custom Fragrance"));

    let resp = app
        .post_form(
            "/contact",
            &[("name", "Sarah"), ("email", "bad"), ("subject", "order"), ("message", "")],
        )
        .await;
    assert_eq!(resp.status().as_u16(), 422);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("Message is required."));
    assert!(body.contains("value=\"order\" selected"));

    let resp = app
        .post_form(
            "/contact",
            &[
                ("name", "Sarah"),
                ("email", "sarah@example.com"),
                ("subject", "order"),
                ("message", "Where is ORD-002?"),
            ],
        )
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.expect("body").contains("Thank you for your message!"));
}

#[tokio::test]
async fn test_newsletter_subscribe() {
    let app = TestApp::spawn().await;

    let resp = app
        .htmx_post("/newsletter/subscribe", &[("email", "sarah@example.com")])
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.expect("body").contains("sarah@example.com"));

    let resp = app
        .htmx_post("/newsletter/subscribe", &[("email", "nope")])
        .await;
    assert!(
        resp.text()
            .await
            .expect("body")
            .contains("Please enter a valid email address.")
    );
}
