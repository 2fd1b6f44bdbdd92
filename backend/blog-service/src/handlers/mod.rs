/// HTTP handlers for blog read endpoints
///
/// This module contains handlers for:
/// - Feed: the fully composed post feed
/// - Views: intermediate joins (posts, comments and likes with their users)
/// - Categories: category lookup table
/// - Health: liveness and store reachability
pub mod categories;
pub mod feed;
pub mod health;
pub mod views;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;

pub use categories::get_category_list;
pub use feed::{get_all_posts, FeedHandlerState};
pub use health::{health_summary, liveness_check};
pub use views::{
    get_comment_with_user_info, get_like_with_user_info, get_only_post_information,
    get_post_with_category_info, get_post_with_comment_user_info, get_post_with_like_user_info,
    get_post_with_user_info,
};

/// Register every route served by blog-service.
///
/// Expects `web::Data<FeedHandlerState>` to be registered on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .route(
            crate::openapi::ApiDoc::openapi_json_path(),
            web::get().to(crate::openapi::openapi_json),
        )
        // Health check endpoints
        .route("/api/v1/health", web::get().to(health_summary))
        .route("/api/v1/health/live", web::get().to(liveness_check))
        .service(
            web::scope("/api/blog").route("/categoryList", web::get().to(get_category_list)),
        )
        .service(
            web::scope("/api/blogPost")
                .route("/allPost", web::get().to(get_all_posts))
                .route("/postWithUserInfo", web::get().to(get_post_with_user_info))
                .route(
                    "/onlyPostInformation",
                    web::get().to(get_only_post_information),
                )
                .route(
                    "/postWithCategoryInfo",
                    web::get().to(get_post_with_category_info),
                )
                .route(
                    "/commentWithUserInfo",
                    web::get().to(get_comment_with_user_info),
                )
                .route(
                    "/postWithCommentUserInfo",
                    web::get().to(get_post_with_comment_user_info),
                )
                .route("/likeWithUserInfo", web::get().to(get_like_with_user_info))
                .route(
                    "/postWithLikeUserInfo",
                    web::get().to(get_post_with_like_user_info),
                ),
        )
        .default_service(web::route().to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}
