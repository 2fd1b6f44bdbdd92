//! Composed, request-scoped views produced by the feed pipeline.
//!
//! Views own their source record and only ever add fields; nothing here is
//! persisted.

use serde::Serialize;

use super::{Comment, Like, OwnedRecord, Post, PostScoped, User};

/// A record with every user whose id matched its owner reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Joined<T> {
    #[serde(flatten)]
    pub record: T,
    pub user_details: Vec<User>,
}

impl<T: OwnedRecord> OwnedRecord for Joined<T> {
    fn record_id(&self) -> &str {
        self.record.record_id()
    }

    fn owner_id(&self) -> &str {
        self.record.owner_id()
    }
}

/// Denormalized owner columns copied onto a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerFields {
    pub user_full_name: String,
    pub username: String,
    pub user_profile_photo: String,
}

impl From<&User> for OwnerFields {
    fn from(user: &User) -> Self {
        Self {
            user_full_name: user.full_name.clone(),
            username: user.username.clone(),
            user_profile_photo: user.user_profile_photo.clone(),
        }
    }
}

/// A record with its owner flattened in.
///
/// `userDetails` is gone unless `T` is itself a `Joined` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithOwner<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(flatten)]
    pub owner: OwnerFields,
}

pub type PostWithUser = WithOwner<Post>;
pub type CommentWithUser = WithOwner<Comment>;
pub type LikeWithUser = WithOwner<Like>;
/// Post carrying both the raw `userDetails` and the flattened owner columns.
pub type PostInformation = WithOwner<Joined<Post>>;

impl<T: OwnedRecord> OwnedRecord for WithOwner<T> {
    fn record_id(&self) -> &str {
        self.record.record_id()
    }

    fn owner_id(&self) -> &str {
        self.record.owner_id()
    }
}

impl<T: PostScoped> PostScoped for WithOwner<T> {
    fn parent_post_id(&self) -> &str {
        self.record.parent_post_id()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCategory {
    #[serde(flatten)]
    pub post: PostWithUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl PostWithCategory {
    pub fn id(&self) -> &str {
        &self.post.record.id
    }
}

/// One fully composed feed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFeedRecord {
    #[serde(flatten)]
    pub post: PostWithCategory,
    pub post_comments: Vec<CommentWithUser>,
    pub post_like: Vec<LikeWithUser>,
    /// Mirror of `_id` for client convenience.
    #[serde(rename = "postID")]
    pub post_id: String,
}
