//! Post document schema

use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::models::Post;

/// Collection name for posts
pub const POST_COLLECTION: &str = "blogposts";

/// Post document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub post_title: String,

    pub post_description: String,

    /// Matches `categoryID` in the category collection
    #[serde(rename = "categoryID")]
    pub category_id: i64,

    /// Owning user
    #[serde(rename = "userID")]
    pub user_id: ObjectId,

    /// File name of the cover image
    pub post_image: String,

    pub post_date_time: DateTime,

    /// Publication state, "posted" for every post created through the API
    pub post_status: String,
}

impl From<PostDoc> for Post {
    fn from(doc: PostDoc) -> Self {
        Post {
            id: doc.id.to_hex(),
            post_title: doc.post_title,
            post_description: doc.post_description,
            category_id: doc.category_id,
            user_id: doc.user_id.to_hex(),
            post_image: doc.post_image,
            post_date_time: doc.post_date_time.to_chrono(),
            post_status: doc.post_status,
        }
    }
}
