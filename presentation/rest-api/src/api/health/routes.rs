use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Human-readable status message
    pub message: String,
}

/// Health API for monitoring and infrastructure checks
///
/// Answers from local state only; it never touches the OCR or
/// text-generation collaborators, so it stays green when they are down.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    /// This endpoint is public and does not require authentication.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "OK".to_string(),
            message: "Pantry backend is running".to_string(),
        })
    }
}
