//! Configuration CRUD integration tests.
//!
//! Run with: `cargo test -p cropper-api --test configurations_test`

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::Part;
use cropper_api::ErrorResponse;
use cropper_core::models::ConfigurationResponse;
use helpers::fixtures::{configuration_form, create_test_png, png_part};
use helpers::{api_path, setup_test_app, TestApp};

async fn create(app: &TestApp, scale_down: &str, position: &str) -> ConfigurationResponse {
    let response = app
        .client()
        .post(&api_path("/config"))
        .add_header("Authorization", app.bearer())
        .multipart(configuration_form(scale_down, position))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<ConfigurationResponse>()
}

#[tokio::test]
async fn test_create_configuration() {
    let app = setup_test_app().await;
    let form = configuration_form("0.2", "Top-Right")
        .add_part("logoImage", png_part(create_test_png(16, 16, [0, 0, 0, 255]), "logo.png"));

    let response = app
        .client()
        .post(&api_path("/config"))
        .add_header("Authorization", app.bearer())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["logoPosition"], "top-right");
    assert_eq!(body["hasLogoImage"], true);
    assert!((body["scaleDown"].as_f64().expect("scaleDown") - 0.2).abs() < 1e-6);
    assert!(body.get("logoImageData").is_none());
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_scale_down_bounds() {
    let app = setup_test_app().await;

    for scale in ["0", "0.26", "-1"] {
        let response = app
            .client()
            .post(&api_path("/config"))
            .add_header("Authorization", app.bearer())
            .multipart(configuration_form(scale, "top-left"))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "scale {}", scale);
        assert_eq!(
            response.json::<ErrorResponse>().error,
            "ScaleDown must be between 0.01 and 0.25"
        );
    }

    let created = create(&app, "0.25", "top-left").await;
    assert_eq!(created.scale_down, 0.25);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_unknown_logo_position_is_rejected() {
    let app = setup_test_app().await;

    for position in ["diagonal", "center"] {
        let response = app
            .client()
            .post(&api_path("/config"))
            .add_header("Authorization", app.bearer())
            .multipart(configuration_form("0.1", position))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorResponse>().error,
            "LogoPosition must be one of: top-left, top-right, bottom-left, bottom-right"
        );
    }
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_non_png_logo_is_rejected() {
    let app = setup_test_app().await;
    let gif = Part::bytes(b"GIF89a".to_vec())
        .file_name("logo.gif")
        .mime_type("image/gif");

    let response = app
        .client()
        .post(&api_path("/config"))
        .add_header("Authorization", app.bearer())
        .multipart(configuration_form("0.1", "top-left").add_part("logoImage", gif))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "Logo image must be a PNG file"
    );
}

#[tokio::test]
async fn test_non_numeric_scale_down_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/config"))
        .add_header("Authorization", app.bearer())
        .multipart(configuration_form("quarter", "top-left"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "scaleDown must be a number"
    );
}

#[tokio::test]
async fn test_get_delete_get() {
    let app = setup_test_app().await;
    let created = create(&app, "0.1", "bottom-left").await;
    let path = api_path(&format!("/config/{}", created.id));

    let response = app
        .client()
        .get(&path)
        .add_header("Authorization", app.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<ConfigurationResponse>().id, created.id);

    let response = app
        .client()
        .delete(&path)
        .add_header("Authorization", app.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app
        .client()
        .get(&path)
        .add_header("Authorization", app.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        format!("Configuration with ID {} not found", created.id)
    );

    let response = app
        .client()
        .delete(&path)
        .add_header("Authorization", app.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_configuration_keeps_logo() {
    let app = setup_test_app().await;
    let form = configuration_form("0.1", "top-left")
        .add_part("logoImage", png_part(create_test_png(8, 8, [9, 9, 9, 255]), "logo.png"));
    let response = app
        .client()
        .post(&api_path("/config"))
        .add_header("Authorization", app.bearer())
        .multipart(form)
        .await;
    let created = response.json::<ConfigurationResponse>();

    let response = app
        .client()
        .put(&api_path(&format!("/config/{}", created.id)))
        .add_header("Authorization", app.bearer())
        .multipart(configuration_form("0.15", "BOTTOM-RIGHT"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<ConfigurationResponse>();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.logo_position, "bottom-right");
    assert_eq!(updated.scale_down, 0.15);
    assert!(updated.has_logo_image);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_unknown_configuration() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .put(&api_path("/config/77"))
        .add_header("Authorization", app.bearer())
        .multipart(configuration_form("0.1", "top-left"))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_configurations_in_id_order() {
    let app = setup_test_app().await;
    let first = create(&app, "0.1", "top-left").await;
    let second = create(&app, "0.2", "top-right").await;

    let response = app
        .client()
        .get(&api_path("/config"))
        .add_header("Authorization", app.bearer())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let ids: Vec<i32> = response
        .json::<Vec<ConfigurationResponse>>()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_configuration_routes_require_bearer_token() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/config")).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_public_endpoints() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");

    let response = app.client().get("/live").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let spec = response.json::<serde_json::Value>();
    assert!(spec["paths"].get("/api/config/{id}").is_some());
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/live")
        .add_header("X-Request-ID", "req-123")
        .await;

    let headers = response.headers();
    assert_eq!(
        headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
    assert_eq!(
        headers.get("x-content-type-options").and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
}
