/// Intermediate feed views, one per pipeline stage
use actix_web::{web, HttpResponse};

use super::FeedHandlerState;
use crate::error::Result;

/// GET /api/blogPost/postWithUserInfo
pub async fn get_post_with_user_info(state: web::Data<FeedHandlerState>) -> Result<HttpResponse> {
    let posts = state.feed.posts_with_user_details().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blogPost/onlyPostInformation
pub async fn get_only_post_information(
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    let posts = state.feed.post_information().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blogPost/postWithCategoryInfo
pub async fn get_post_with_category_info(
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    let posts = state.feed.posts_with_category().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blogPost/commentWithUserInfo
pub async fn get_comment_with_user_info(
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    let comments = state.feed.comments_with_user_details().await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/blogPost/postWithCommentUserInfo
pub async fn get_post_with_comment_user_info(
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    let comments = state.feed.comments_with_user().await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/blogPost/likeWithUserInfo
pub async fn get_like_with_user_info(state: web::Data<FeedHandlerState>) -> Result<HttpResponse> {
    let likes = state.feed.likes_with_user_details().await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// GET /api/blogPost/postWithLikeUserInfo
pub async fn get_post_with_like_user_info(
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    let likes = state.feed.likes_with_user().await?;
    Ok(HttpResponse::Ok().json(likes))
}
