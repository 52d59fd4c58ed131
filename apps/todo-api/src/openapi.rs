//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "To-Do List API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for managing tasks",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    )
)]
struct ApiInfo;

/// Service info plus every path of the todos domain
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiInfo::openapi().merge_from(domain_todos::ApiDoc::openapi())
    }
}
