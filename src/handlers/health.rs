use axum::Json;
use crate::models::HealthResponse;
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthStatus;

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.message, "SolMint backend is running.");
    }

    #[tokio::test]
    async fn health_check_never_varies() {
        let Json(first) = health_check().await;
        for _ in 0..10 {
            let Json(next) = health_check().await;
            assert_eq!(next, first);
        }
    }
}
