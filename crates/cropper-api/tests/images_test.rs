//! Crop preview and generation integration tests.
//!
//! Run with: `cargo test -p cropper-api --test images_test`

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use cropper_api::ErrorResponse;
use cropper_core::models::{ConfigurationInput, CropRectangle, CropResult, LogoImage, LogoPosition};
use cropper_db::ConfigurationStore;
use helpers::api_path;
use helpers::fixtures::{add_rectangle, create_test_png, crop_form, png_part, result_dimensions};
use helpers::setup_test_app;

fn source_png() -> Part {
    png_part(create_test_png(400, 200, [30, 60, 90, 255]), "source.png")
}

#[tokio::test]
async fn test_preview_reports_bad_rectangle_in_place() {
    let app = setup_test_app().await;
    let rectangles = [
        CropRectangle::new(0, 0, 200, 200),
        CropRectangle::new(390, 190, 50, 50),
        CropRectangle::new(1000, 1000, 10, 10),
    ];

    let response = app
        .client()
        .post(&api_path("/image/preview"))
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(source_png(), &rectangles))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let results = response.json::<Vec<CropResult>>();
    assert_eq!(results.len(), 3);

    // 200x200 at 5%
    assert_eq!(result_dimensions(&results[0]), (10, 10));
    assert_eq!(results[0].content_type.as_deref(), Some("image/png"));

    // Clamped to 10x10, which shrinks to nothing at 5%
    assert!(results[1].error.is_some());

    assert_eq!(results[2].coordinates, rectangles[2]);
    assert_eq!(
        results[2].error.as_deref(),
        Some("Crop coordinates are outside image boundaries")
    );
    assert!(results[2].image_data.is_none());
}

#[tokio::test]
async fn test_preview_requires_three_rectangles() {
    let app = setup_test_app().await;
    let rectangles = [
        CropRectangle::new(0, 0, 100, 100),
        CropRectangle::new(0, 0, 200, 100),
    ];

    let response = app
        .client()
        .post(&api_path("/image/preview"))
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(source_png(), &rectangles))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<ErrorResponse>();
    assert_eq!(body.error, "At least 3 crop coordinates are required");
    assert_eq!(body.code, "INVALID_INPUT");
}

#[tokio::test]
async fn test_preview_rejects_non_png_upload() {
    let app = setup_test_app().await;
    let jpeg = Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("photo.jpg")
        .mime_type("image/jpeg");
    let rectangles = [CropRectangle::new(0, 0, 10, 10); 3];

    let response = app
        .client()
        .post(&api_path("/image/preview"))
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(jpeg, &rectangles))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "Only PNG images are supported"
    );
}

#[tokio::test]
async fn test_generate_requires_image() {
    let app = setup_test_app().await;
    let form = add_rectangle(MultipartForm::new(), 0, &CropRectangle::new(0, 0, 10, 10));

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", app.bearer())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().error, "No image provided");
}

#[tokio::test]
async fn test_generate_requires_a_rectangle() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(source_png(), &[]))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "At least one crop coordinate is required"
    );
}

#[tokio::test]
async fn test_generate_without_config_returns_full_size_crops() {
    let app = setup_test_app().await;
    let rectangles = [
        CropRectangle::new(0, 0, 400, 200),
        CropRectangle::new(350, 150, 100, 100),
    ];

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(source_png(), &rectangles))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let results = response.json::<Vec<CropResult>>();
    assert_eq!(result_dimensions(&results[0]), (400, 200));
    // Clamped to the image edge
    assert_eq!(result_dimensions(&results[1]), (50, 50));
    assert!(results.iter().all(|r| !r.has_logo_overlay));
}

#[tokio::test]
async fn test_generate_unknown_config_is_not_found() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_query_param("configId", 4242)
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(source_png(), &[CropRectangle::new(0, 0, 10, 10)]))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "Configuration with ID 4242 not found"
    );
}

#[tokio::test]
async fn test_generate_with_logo_config_overlays_and_scales() {
    let app = setup_test_app().await;
    let configuration = app
        .store
        .create(ConfigurationInput {
            scale_down: 0.25,
            logo_position: LogoPosition::BottomRight,
            logo: Some(LogoImage {
                data: create_test_png(40, 20, [255, 255, 255, 255]),
                content_type: "image/png".to_string(),
            }),
        })
        .await
        .expect("Failed to seed configuration");

    let rectangles = [
        CropRectangle::new(0, 0, 400, 200),
        CropRectangle::new(-5, 0, 10, 10),
        CropRectangle::new(200, 0, 200, 200),
    ];

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_query_param("configId", configuration.id)
        .add_header("Authorization", app.bearer())
        .multipart(crop_form(source_png(), &rectangles))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let results = response.json::<Vec<CropResult>>();
    assert_eq!(results.len(), 3);

    assert_eq!(result_dimensions(&results[0]), (100, 50));
    assert!(results[0].has_logo_overlay);

    assert!(results[1].error.is_some());
    assert!(!results[1].has_logo_overlay);

    assert_eq!(result_dimensions(&results[2]), (50, 50));
    assert!(results[2].has_logo_overlay);
}

#[tokio::test]
async fn test_rectangles_are_ordered_by_index() {
    let app = setup_test_app().await;
    let form = MultipartForm::new().add_part("image", source_png());
    let form = add_rectangle(form, 7, &CropRectangle::new(0, 0, 30, 30));
    let form = add_rectangle(form, 2, &CropRectangle::new(0, 0, 20, 20));
    let form = add_rectangle(form, 4, &CropRectangle::new(0, 0, 10, 10));

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", app.bearer())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let widths: Vec<i32> = response
        .json::<Vec<CropResult>>()
        .iter()
        .map(|r| r.coordinates.width)
        .collect();
    assert_eq!(widths, vec![20, 10, 30]);
}

#[tokio::test]
async fn test_incomplete_rectangle_is_rejected() {
    let app = setup_test_app().await;
    let form = MultipartForm::new()
        .add_part("image", source_png())
        .add_text("cropCoordinates[0].x", 0)
        .add_text("cropCoordinates[0].y", 0)
        .add_text("cropCoordinates[0].width", 10);

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", app.bearer())
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "Crop coordinate 0 is missing height"
    );
}

#[tokio::test]
async fn test_image_routes_require_bearer_token() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .multipart(crop_form(source_png(), &[CropRectangle::new(0, 0, 10, 10)]))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "Missing authorization header"
    );

    let response = app
        .client()
        .post(&api_path("/image/preview"))
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .multipart(crop_form(source_png(), &[CropRectangle::new(0, 0, 10, 10); 3]))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "Invalid authorization header format"
    );
}

#[tokio::test]
async fn test_expired_or_foreign_tokens_are_rejected() {
    let app = setup_test_app().await;

    let expired = helpers::auth::issue_expired_token("test-user");
    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", format!("Bearer {}", expired))
        .multipart(crop_form(source_png(), &[CropRectangle::new(0, 0, 10, 10)]))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorResponse>().error, "Token has expired");

    let foreign = helpers::auth::issue_token_with_secret(
        "test-user",
        "some-other-service-secret-0123456789abcdef",
    );
    let response = app
        .client()
        .post(&api_path("/image/generate"))
        .add_header("Authorization", format!("Bearer {}", foreign))
        .multipart(crop_form(source_png(), &[CropRectangle::new(0, 0, 10, 10)]))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
