use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "api",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
    ),
    components(
        schemas(HealthResponse, HealthStatus)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_health_route() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/api/health").unwrap();
        assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Get));
        assert_eq!(doc.paths.paths.len(), 1);

        let schemas = doc.components.unwrap().schemas;
        assert!(schemas.contains_key("HealthResponse"));
        assert!(schemas.contains_key("HealthStatus"));
    }
}
