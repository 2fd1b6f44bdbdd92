//! Like document schema

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::Like;

/// Collection name for likes
pub const LIKE_COLLECTION: &str = "blogpostlikes";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LikeDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(rename = "userID")]
    pub user_id: ObjectId,

    #[serde(rename = "postID")]
    pub post_id: ObjectId,
}

impl From<LikeDoc> for Like {
    fn from(doc: LikeDoc) -> Self {
        Like {
            id: doc.id.to_hex(),
            user_id: doc.user_id.to_hex(),
            post_id: doc.post_id.to_hex(),
        }
    }
}
