//! The signed-in customer dashboard: orders, wishlist and settings.

use lara_integration_tests::{TestApp, location};

async fn signed_in() -> TestApp {
    let app = TestApp::spawn().await;
    app.login("sarah.johnson@example.com").await;
    app
}

#[tokio::test]
async fn test_dashboard_requires_sign_in() {
    let app = TestApp::spawn().await;

    for (path, expected) in [
        ("/dashboard", "/auth/login?next=%2Fdashboard"),
        ("/dashboard/orders", "/auth/login?next=%2Fdashboard%2Forders"),
        (
            "/dashboard/orders/ORD-001",
            "/auth/login?next=%2Fdashboard%2Forders%2FORD-001",
        ),
        (
            "/dashboard/orders?status=shipped",
            "/auth/login?next=%2Fdashboard%2Forders%3Fstatus%3Dshipped",
        ),
        ("/dashboard/settings", "/auth/login?next=%2Fdashboard%2Fsettings"),
    ] {
        let resp = app.get(path).await;
        assert_eq!(resp.status().as_u16(), 303, "{path}");
        assert_eq!(location(&resp), expected, "{path}");
    }
}

#[tokio::test]
async fn test_sign_in_returns_to_requested_page() {
    let app = TestApp::spawn().await;

    let resp = app.get("/dashboard/orders?status=shipped").await;
    let login_url = location(&resp);
    let (status, body) = app.get_page(&login_url).await;
    assert_eq!(status, 200);
    assert!(body.contains("name=\"next\""));
    assert!(body.contains("status=shipped"));

    let resp = app
        .post_form(
            "/auth/login",
            &[
                ("email", "sarah@example.com"),
                ("password", "secret"),
                ("next", "/dashboard/orders?status=shipped"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard/orders?status=shipped");

    let (status, body) = app.get_page("/dashboard/orders?status=shipped").await;
    assert_eq!(status, 200);
    assert!(body.contains("ORD-002"));
}

#[tokio::test]
async fn test_overview() {
    let app = signed_in().await;

    let (status, body) = app.get_page("/dashboard").await;
    assert_eq!(status, 200);
    assert!(body.contains("Recent orders"));
    assert!(body.contains("ORD-001"));
    assert!(body.contains("Monthly spending"));
    // The starter wishlist is seeded at sign-in.
    assert!(body.contains("Vanilla Orchid"));
}

#[tokio::test]
async fn test_orders_filter_and_detail() {
    let app = signed_in().await;

    let (_, body) = app.get_page("/dashboard/orders?status=delivered").await;
    assert!(body.contains("ORD-001"));
    assert!(!body.contains("ORD-004"));

    let (status, body) = app.get_page("/dashboard/orders/ORD-002").await;
    assert_eq!(status, 200);
    assert!(body.contains("Order ORD-002"));
    assert!(body.contains("Shipped"));

    let (status, _) = app.get_page("/dashboard/orders/ORD-999").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_cancel_order() {
    let app = signed_in().await;

    let resp = app.post_form("/dashboard/orders/ORD-004/cancel", &[]).await;
    assert_eq!(location(&resp), "/dashboard/orders/ORD-004");
    let (_, body) = app.get_page("/dashboard/orders/ORD-004").await;
    assert!(body.contains("Order ORD-004 has been cancelled."));
    assert!(body.contains("status-cancelled"));

    // Shipped orders cannot be cancelled.
    app.post_form("/dashboard/orders/ORD-002/cancel", &[]).await;
    let (_, body) = app.get_page("/dashboard/orders/ORD-002").await;
    assert!(body.contains("cannot be cancelled"));
    assert!(body.contains("status-shipped"));
}

#[tokio::test]
async fn test_reorder_fills_the_cart() {
    let app = signed_in().await;

    let resp = app.post_form("/dashboard/orders/ORD-001/reorder", &[]).await;
    assert_eq!(location(&resp), "/cart");

    let (_, body) = app.get_page("/cart").await;
    assert!(body.contains("added to your cart"));
    assert!(!body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_wishlist_toggle_and_remove() {
    let app = signed_in().await;

    let (_, body) = app.get_page("/dashboard/wishlist").await;
    assert!(body.contains("3 saved fragrances"));

    let resp = app
        .htmx_post("/dashboard/wishlist/toggle", &[("product_id", "1")])
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    let button = resp.text().await.expect("body");
    assert!(button.contains("is-active"));

    let (_, body) = app.get_page("/dashboard/wishlist").await;
    assert!(body.contains("4 saved fragrances"));
    assert!(body.contains("Midnight Rose"));

    let resp = app
        .htmx_post("/dashboard/wishlist/remove", &[("product_id", "1")])
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.expect("body").is_empty());

    let (_, body) = app.get_page("/dashboard/wishlist?search=vanilla").await;
    assert!(body.contains("Vanilla Orchid"));
    assert!(!body.contains("Citrus Burst"));
}

#[tokio::test]
async fn test_wishlist_toggle_requires_sign_in() {
    let app = TestApp::spawn().await;

    let resp = app
        .htmx_post(
            "/dashboard/wishlist/toggle",
            &[("product_id", "1"), ("return_to", "/products/1")],
        )
        .await;
    assert_eq!(
        resp.headers()["hx-redirect"],
        "/auth/login?next=%2Fproducts%2F1"
    );
}

#[tokio::test]
async fn test_settings_save_and_validation() {
    let app = signed_in().await;

    let resp = app
        .post_form(
            "/dashboard/settings",
            &[
                ("first_name", "Sarah"),
                ("last_name", "Wijaya"),
                ("email", "sarah.wijaya@example.com"),
                ("city", "Bandung"),
                ("order_updates", "on"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard/settings");

    let (_, body) = app.get_page("/dashboard/settings").await;
    assert!(body.contains("Your settings have been saved."));
    assert!(body.contains("value=\"Bandung\""));
    assert!(body.contains("Sarah Wijaya"));

    let resp = app
        .post_form(
            "/dashboard/settings",
            &[("first_name", ""), ("last_name", "Wijaya"), ("email", "nope")],
        )
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.text().await.expect("body");
    assert!(body.contains("First name is required."));
    assert!(body.contains("Email is invalid"));
}

#[tokio::test]
async fn test_change_password() {
    let app = signed_in().await;

    let resp = app
        .post_form(
            "/dashboard/settings/password",
            &[
                ("current_password", ""),
                ("new_password", "short"),
                ("confirm_password", "short"),
            ],
        )
        .await;
    assert_eq!(resp.status().as_u16(), 422);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Current password is required."));
    assert!(body.contains("New password must be at least 8 characters."));

    let resp = app
        .post_form(
            "/dashboard/settings/password",
            &[
                ("current_password", "secret-password"),
                ("new_password", "new-password"),
                ("confirm_password", "new-passw0rd"),
            ],
        )
        .await;
    assert_eq!(resp.status().as_u16(), 422);
    assert!(resp.text().await.expect("body").contains("New passwords do not match."));

    let resp = app
        .post_form(
            "/dashboard/settings/password",
            &[
                ("current_password", "secret-password"),
                ("new_password", "new-password"),
                ("confirm_password", "new-password"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard/settings");
    let (_, body) = app.get_page("/dashboard/settings").await;
    assert!(body.contains("Your password has been updated."));
}
