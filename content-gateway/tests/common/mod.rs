//! Test helper module for content-gateway integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use content_gateway::{
    AppState, build_router,
    config::{Environment, GatewayConfig, OllamaConfig, TokenConfig, UsersConfig},
    models::User,
    services::providers::TextProvider,
    services::providers::mock::MockTextProvider,
    services::{AuthService, ContentService, JwtService, StaticCredentialStore},
    utils::hash_secret,
};
use gateway_core::config as core_config;
use tower::util::ServiceExt;

pub const TEST_SIGNING_KEY: &str = "integration-test-signing-key";
pub const TEST_PASSWORD: &str = "secret";

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        common: core_config::Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        environment: Environment::Dev,
        log_level: "error".to_string(),
        token: TokenConfig {
            signing_key: TEST_SIGNING_KEY.to_string(),
            ttl_minutes: 30,
        },
        ollama: OllamaConfig {
            base_url: "http://localhost:11434".to_string(),
            model: "phi3".to_string(),
            temperature: 0.0,
        },
        users: UsersConfig { seed_json: None },
    }
}

/// One active user and one disabled user.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            username: "johndoe".to_string(),
            display_name: "John Doe".to_string(),
            hashed_secret: hash_secret(TEST_PASSWORD).expect("hash failed"),
            disabled: false,
        },
        User {
            username: "inactive".to_string(),
            display_name: "Inactive User".to_string(),
            hashed_secret: hash_secret(TEST_PASSWORD).expect("hash failed"),
            disabled: true,
        },
    ]
}

pub fn build_state(provider: Arc<dyn TextProvider>) -> AppState {
    let config = test_config();
    let store = Arc::new(StaticCredentialStore::new(seed_users()));
    let jwt = JwtService::new(&config.token);

    AppState {
        auth: AuthService::new(store, jwt),
        content: ContentService::new(provider, config.ollama.temperature),
        config,
    }
}

/// Router plus its state, with a scripted provider response.
pub fn build_app(provider: MockTextProvider) -> (Router, AppState) {
    let state = build_state(Arc::new(provider));
    (build_router(state.clone()), state)
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, bearer: Option<&str>, body: &str) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in through the wire and return the issued bearer token.
pub async fn obtain_token(app: &Router, username: &str, password: &str) -> String {
    let body = serde_urlencoded::to_string([("username", username), ("password", password)])
        .expect("form encoding failed");
    let response = post_form(app, "/token", &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"].as_str().expect("no token").to_string()
}
