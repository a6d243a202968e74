//! API constants

/// Base path of every application route
pub const API_PREFIX: &str = "/api";

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Path of the RapiDoc UI
pub const DOCS_PATH: &str = "/docs";
