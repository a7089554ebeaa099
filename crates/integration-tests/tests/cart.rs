//! Adding, updating and removing cart lines, with and without HTMX.

use lara_integration_tests::{TestApp, location};

#[tokio::test]
async fn test_empty_cart() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/cart").await;
    assert_eq!(status, 200);
    assert!(body.contains("Your cart is empty"));

    let (_, badge) = app.get_page("/cart/count").await;
    assert!(badge.contains(">0</span>"));
}

#[tokio::test]
async fn test_add_to_cart_with_plain_form_redirects_back() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/cart/add",
            &[
                ("product_id", "1"),
                ("size", "100ml"),
                ("quantity", "2"),
                ("return_to", "/products/1"),
            ],
        )
        .await;
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(location(&resp), "/products/1");

    let (_, body) = app.get_page("/cart").await;
    assert!(body.contains("Midnight Rose"));
    assert!(body.contains("100ml"));
    // Two bottles at the catalog's 100ml price.
    assert!(body.contains("$379.98"));
}

#[tokio::test]
async fn test_htmx_add_returns_badge_and_trigger() {
    let app = TestApp::spawn().await;

    let resp = app
        .htmx_post("/cart/add", &[("product_id", "2"), ("quantity", "3")])
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers()["hx-trigger"], "cart-updated");
    let body = resp.text().await.expect("body");
    assert!(body.contains("id=\"cart-count\""));
    assert!(body.contains(">3</span>"));

    // Same product and size merges into one line.
    app.htmx_post("/cart/add", &[("product_id", "2")]).await;
    let (_, badge) = app.get_page("/cart/count").await;
    assert!(badge.contains(">4</span>"));
}

#[tokio::test]
async fn test_repeated_adds_stop_at_ten() {
    let app = TestApp::spawn().await;

    for _ in 0..2 {
        app.htmx_post("/cart/add", &[("product_id", "2"), ("quantity", "10")])
            .await;
    }
    let (_, badge) = app.get_page("/cart/count").await;
    assert!(badge.contains(">10</span>"));
}

#[tokio::test]
async fn test_add_rejections_leave_cart_unchanged() {
    let app = TestApp::spawn().await;

    // Out of stock.
    let resp = app.post_form("/cart/add", &[("product_id", "8")]).await;
    assert_eq!(resp.status().as_u16(), 303);
    let (_, body) = app.get_page("/cart").await;
    assert!(body.contains("Jasmine Noir is currently out of stock."));
    assert!(body.contains("Your cart is empty"));

    // Unknown product over HTMX asks for a refresh.
    let resp = app.htmx_post("/cart/add", &[("product_id", "99")]).await;
    assert_eq!(resp.headers()["hx-refresh"], "true");

    let (_, badge) = app.get_page("/cart/count").await;
    assert!(badge.contains(">0</span>"));
}

#[tokio::test]
async fn test_update_remove_and_clear() {
    let app = TestApp::spawn().await;
    app.post_form("/cart/add", &[("product_id", "3"), ("size", "50ml")])
        .await;
    app.post_form("/cart/add", &[("product_id", "4"), ("size", "30ml")])
        .await;

    let resp = app
        .htmx_post(
            "/cart/update",
            &[("product_id", "3"), ("size", "50ml"), ("quantity", "4")],
        )
        .await;
    assert_eq!(resp.headers()["hx-trigger"], "cart-updated");
    let body = resp.text().await.expect("body");
    assert!(body.contains("id=\"cart-items\""));
    assert!(body.contains("name=\"quantity\" value=\"4\""));

    // Quantity zero removes the line.
    app.htmx_post(
        "/cart/update",
        &[("product_id", "3"), ("size", "50ml"), ("quantity", "0")],
    )
    .await;
    let (_, body) = app.get_page("/cart").await;
    assert!(!body.contains("Golden Amber"));
    assert!(body.contains("Lavender Dreams"));

    let resp = app
        .post_form("/cart/remove", &[("product_id", "4"), ("size", "30ml")])
        .await;
    assert_eq!(location(&resp), "/cart");
    let (_, body) = app.get_page("/cart").await;
    assert!(body.contains("Your cart is empty"));

    app.post_form("/cart/add", &[("product_id", "5")]).await;
    app.post_form("/cart/clear", &[]).await;
    let (_, badge) = app.get_page("/cart/count").await;
    assert!(badge.contains(">0</span>"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let first = TestApp::spawn().await;
    first.post_form("/cart/add", &[("product_id", "1")]).await;

    let second = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("client");
    let badge = second
        .get(first.url("/cart/count"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(badge.contains(">0</span>"));
}
