use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name reported in the liveness message
pub const SERVICE_NAME: &str = "SolMint";

/// Liveness state reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// API response for health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: format!("{SERVICE_NAME} backend is running."),
        }
    }
}
