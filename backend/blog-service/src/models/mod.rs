/// Data models for blog-service
///
/// This module defines structures for:
/// - User: Author identity as seen by the feed (no credentials)
/// - Post: Blog posts with a category and an owner
/// - Comment / Like: Reactions attached to a post
/// - Category: Numeric-keyed lookup table for post categories
///
/// JSON field names follow the stored documents so that responses keep the
/// shape existing clients already consume.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod views;

pub use views::{
    CommentWithUser, Joined, LikeWithUser, OwnerFields, PostFeedRecord, PostInformation,
    PostWithCategory, PostWithUser, WithOwner,
};

/// Author of posts, comments and likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub user_profile_photo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub post_title: String,
    pub post_description: String,
    #[serde(rename = "categoryID")]
    pub category_id: i64,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub post_image: String,
    pub post_date_time: DateTime<Utc>,
    pub post_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment_description: String,
    pub comment_date_time: DateTime<Utc>,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "postID")]
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "postID")]
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "categoryID")]
    pub category_id: i64,
    pub category_name: String,
    pub category_description: String,
}

/// A record that belongs to exactly one user through an owner reference.
pub trait OwnedRecord {
    /// Primary identifier of the record itself.
    fn record_id(&self) -> &str;

    /// Identifier of the owning user.
    fn owner_id(&self) -> &str;
}

/// A record that hangs off a post (comments and likes).
pub trait PostScoped {
    fn parent_post_id(&self) -> &str;
}

impl OwnedRecord for Post {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl OwnedRecord for Comment {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl OwnedRecord for Like {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl PostScoped for Comment {
    fn parent_post_id(&self) -> &str {
        &self.post_id
    }
}

impl PostScoped for Like {
    fn parent_post_id(&self) -> &str {
        &self.post_id
    }
}
