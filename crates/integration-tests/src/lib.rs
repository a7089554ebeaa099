//! End-to-end test harness for the Lara Parfume storefront.
//!
//! Each [`TestApp`] runs the real router on an ephemeral local port with
//! its own in-memory session store and rate limiter, so tests stay isolated
//! and can run in parallel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lara-integration-tests
//! ```
//!
//! Login and registration posts allow a burst of five per client IP, so a
//! single test should not post to `/auth` more than five times.

use std::net::SocketAddr;
use std::path::PathBuf;

use lara_storefront::config::StorefrontConfig;
use lara_storefront::state::AppState;
use reqwest::{Client, Response, redirect};

/// A running storefront plus a cookie-carrying client.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
}

impl TestApp {
    /// Start a storefront with the default local configuration.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind a local port.
    pub async fn spawn() -> Self {
        let mut config = StorefrontConfig::local().expect("local config is valid");
        config.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static");

        let app = lara_storefront::app(AppState::new(config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has an address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("test server failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` without following redirects.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET `path` and return the status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not text.
    pub async fn get_page(&self, path: &str) -> (u16, String) {
        let resp = self.get(path).await;
        let status = resp.status().as_u16();
        (status, resp.text().await.expect("Failed to read body"))
    }

    /// POST a urlencoded form to `path` without following redirects.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// POST a form the way HTMX does, with the `HX-Request` header.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn htmx_post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("HTMX request failed")
    }

    /// Sign in through the login form.
    ///
    /// # Panics
    ///
    /// Panics if the login is not accepted.
    pub async fn login(&self, email: &str) {
        let resp = self
            .post_form("/auth/login", &[("email", email), ("password", "secret-password")])
            .await;
        assert_eq!(resp.status().as_u16(), 303, "login should redirect");
        assert_eq!(location(&resp), "/dashboard");
    }
}

/// The `Location` header of a redirect, or an empty string.
#[must_use]
pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
