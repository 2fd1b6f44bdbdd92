//! Category document schema
//!
//! Posts reference categories by the numeric `categoryID`. The document `_id`
//! is only passed through to category listings.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Collection name for categories
pub const CATEGORY_COLLECTION: &str = "blogcategories";

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(rename = "categoryID")]
    pub category_id: i64,

    pub category_name: String,

    pub category_description: String,
}

impl From<CategoryDoc> for Category {
    fn from(doc: CategoryDoc) -> Self {
        Category {
            id: doc.id.to_hex(),
            category_id: doc.category_id,
            category_name: doc.category_name,
            category_description: doc.category_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn decodes_int32_category_id() {
        let id = ObjectId::parse_str("65e1f0c2a1b2c3d4e5f60a05").unwrap();
        let raw = doc! {
            "_id": id,
            "categoryID": 5_i32,
            "categoryName": "Tech",
            "categoryDescription": "Programming and gadgets",
            "__v": 0_i32,
        };

        let decoded: CategoryDoc = bson::from_document(raw).unwrap();
        let category = Category::from(decoded);
        assert_eq!(category.category_id, 5);
        assert_eq!(category.category_name, "Tech");
        assert_eq!(category.id, "65e1f0c2a1b2c3d4e5f60a05");
    }
}
