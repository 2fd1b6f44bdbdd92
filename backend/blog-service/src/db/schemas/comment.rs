//! Comment document schema

use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::models::Comment;

/// Collection name for comments
pub const COMMENT_COLLECTION: &str = "blogpostcomments";

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub comment_description: String,

    /// Creation time, bumped when the comment is edited
    pub comment_date_time: DateTime,

    #[serde(rename = "userID")]
    pub user_id: ObjectId,

    #[serde(rename = "postID")]
    pub post_id: ObjectId,
}

impl From<CommentDoc> for Comment {
    fn from(doc: CommentDoc) -> Self {
        Comment {
            id: doc.id.to_hex(),
            comment_description: doc.comment_description,
            comment_date_time: doc.comment_date_time.to_chrono(),
            user_id: doc.user_id.to_hex(),
            post_id: doc.post_id.to_hex(),
        }
    }
}
