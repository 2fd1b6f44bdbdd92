use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::services::FeedService;

pub struct FeedHandlerState {
    pub feed: Arc<FeedService>,
}

impl FeedHandlerState {
    pub fn new(feed: FeedService) -> Self {
        Self {
            feed: Arc::new(feed),
        }
    }
}

/// Full feed: every post with owner, category, comments and likes
/// GET /api/blogPost/allPost
pub async fn get_all_posts(state: web::Data<FeedHandlerState>) -> Result<HttpResponse> {
    let feed = state.feed.get_feed().await?;
    debug!(records = feed.len(), "serving feed");
    Ok(HttpResponse::Ok().json(feed))
}
