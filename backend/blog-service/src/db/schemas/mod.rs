//! MongoDB document schemas for the blog collections
//!
//! Documents are decoded from BSON and converted into domain records; object
//! ids become their 24-digit hex rendering and BSON datetimes become UTC
//! timestamps.

mod category;
mod comment;
mod like;
mod post;
mod user;

pub use category::{CategoryDoc, CATEGORY_COLLECTION};
pub use comment::{CommentDoc, COMMENT_COLLECTION};
pub use like::{LikeDoc, LIKE_COLLECTION};
pub use post::{PostDoc, POST_COLLECTION};
pub use user::{UserDoc, USER_COLLECTION};
