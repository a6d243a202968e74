//! Test helpers: build AppState and router for integration tests.
//!
//! The router is the production one; only the configuration store is swapped for the
//! in-memory implementation, so no database is needed.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;

use axum_test::TestServer;
use cropper_api::constants;
use cropper_api::setup::routes;
use cropper_api::state::AppState;
use cropper_core::{BaseConfig, Config};
use cropper_db::test_helpers::InMemoryConfigurationStore;
use std::sync::Arc;

/// API path for tests (e.g. `/api/config`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

pub fn test_config() -> Config {
    Config {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["http://localhost:5173".to_string()],
            db_max_connections: 1,
            db_timeout_seconds: 5,
            jwt_secret: auth::TEST_JWT_SECRET.to_string(),
            jwt_issuer: None,
            jwt_audience: None,
            environment: "test".to_string(),
            log_format: "text".to_string(),
        },
        database_url: "postgres://localhost/unused".to_string(),
        max_upload_size_bytes: 5 * 1024 * 1024,
        preview_scale_down: 0.05,
    }
}

/// Test application: server plus a handle on the backing store.
pub struct TestApp {
    pub server: TestServer,
    pub store: InMemoryConfigurationStore,
    pub token: String,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub async fn setup_test_app() -> TestApp {
    let config = test_config();
    let store = InMemoryConfigurationStore::new();
    let state = Arc::new(AppState::new(config.clone(), Arc::new(store.clone())));

    let router = routes::setup_routes(&config, state)
        .await
        .expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        store,
        token: auth::issue_token("test-user"),
    }
}
