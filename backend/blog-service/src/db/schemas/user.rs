//! User document schema
//!
//! Only the columns the feed denormalizes are decoded. Credentials and
//! contact details stay in the store.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Collection name for users
pub const USER_COLLECTION: &str = "blogusers";

/// User document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    /// MongoDB document ID
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Display name, first/middle/last joined by single spaces
    pub full_name: String,

    /// Unique handle
    pub username: String,

    /// File name of the avatar image
    pub user_profile_photo: String,
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        User {
            id: doc.id.to_hex(),
            full_name: doc.full_name,
            username: doc.username,
            user_profile_photo: doc.user_profile_photo,
        }
    }
}
