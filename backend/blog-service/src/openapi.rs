/// OpenAPI documentation for Blog Service
use actix_web::HttpResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service API",
        version = "1.0.0",
        description = "Read side of the blogging platform. Serves the composed post feed (post, author, category, comments and likes) and the intermediate joined views it is built from.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "feed", description = "Fully composed post feed"),
        (name = "views", description = "Posts, comments and likes joined with their users"),
        (name = "categories", description = "Category lookup"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}

pub async fn openapi_json() -> HttpResponse {
    match serde_json::to_string(&ApiDoc::openapi()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            tracing::error!("OpenAPI serialization failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
