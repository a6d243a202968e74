use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

/// Shared secret of the test application (must match `test_config`).
pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-characters";

fn sign(claims: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// A token valid for one hour.
pub fn issue_token(subject: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    sign(
        json!({ "sub": subject, "iat": now, "exp": now + 3600 }),
        TEST_JWT_SECRET,
    )
}

pub fn issue_expired_token(subject: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    sign(
        json!({ "sub": subject, "iat": now - 7200, "exp": now - 3600 }),
        TEST_JWT_SECRET,
    )
}

pub fn issue_token_with_secret(subject: &str, secret: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    sign(json!({ "sub": subject, "iat": now, "exp": now + 3600 }), secret)
}
