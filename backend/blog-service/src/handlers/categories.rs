use actix_web::{web, HttpResponse};

use super::FeedHandlerState;
use crate::error::Result;

/// All categories in collection order
/// GET /api/blog/categoryList
pub async fn get_category_list(state: web::Data<FeedHandlerState>) -> Result<HttpResponse> {
    let categories = state.feed.categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}
