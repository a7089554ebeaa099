//! Browsing the home page, product listing, product pages and categories.

use lara_integration_tests::TestApp;

#[tokio::test]
async fn test_health_and_home() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, body) = app.get_page("/").await;
    assert_eq!(status, 200);
    assert!(body.contains("Lara"));
    assert!(body.contains("Midnight Rose"));
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let app = TestApp::spawn().await;
    let resp = app.get("/").await;

    let headers = resp.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_product_listing_filters_and_sorts() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/products?search=rose").await;
    assert_eq!(status, 200);
    assert!(body.contains("Midnight Rose"));
    assert!(!body.contains("Ocean Breeze"));

    let (_, body) = app.get_page("/products?category=Woody").await;
    assert!(body.contains("Spiced Cedar"));
    assert!(!body.contains("Vanilla Orchid"));

    let (_, body) = app.get_page("/products?sort=price-low").await;
    let cheapest = body.find("Citrus Burst").unwrap_or(usize::MAX);
    let priciest = body.find("Golden Amber").unwrap_or(0);
    assert!(cheapest < priciest, "price-low lists cheaper products first");

    let (_, body) = app.get_page("/products?search=nothing-matches-this").await;
    assert!(body.contains("No fragrances found"));
}

#[tokio::test]
async fn test_product_detail_and_unknown_product() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/products/1").await;
    assert_eq!(status, 200);
    assert!(body.contains("Midnight Rose"));
    assert!(body.contains("Bergamot"));
    assert!(body.contains("Eau de Parfum"));

    let (status, body) = app.get_page("/products/999").await;
    assert_eq!(status, 404);
    assert!(body.contains("Product Not Found"));
}

#[tokio::test]
async fn test_categories() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/categories").await;
    assert_eq!(status, 200);
    assert!(body.contains("Aquatic"));

    let (_, body) = app.get_page("/categories?featured=true").await;
    assert!(body.contains("Floral"));
    assert!(!body.contains("Aquatic"));

    let (status, body) = app.get_page("/categories/floral").await;
    assert_eq!(status, 200);
    assert!(body.contains("Midnight Rose"));
    assert!(body.contains("Vanilla Orchid"));

    let (status, body) = app.get_page("/categories/unknown").await;
    assert_eq!(status, 404);
    assert!(body.contains("Category Not Found"));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_page("/no/such/page").await;
    assert_eq!(status, 404);
    assert!(body.contains("Page Not Found"));
}
