//! Category enrichment: attach the display name of each post's category.

use std::collections::HashMap;

use crate::models::{Category, PostWithCategory, PostWithUser};

/// Look up `categoryName` by numeric category id.
///
/// When several categories share an id the last one in collection order
/// wins. A post whose id matches nothing keeps `category_name == None`.
pub fn enrich_categories(
    posts: Vec<PostWithUser>,
    categories: &[Category],
) -> Vec<PostWithCategory> {
    let mut names: HashMap<i64, &str> = HashMap::with_capacity(categories.len());
    for category in categories {
        names.insert(category.category_id, category.category_name.as_str());
    }

    posts
        .into_iter()
        .map(|post| {
            let category_name = names
                .get(&post.record.category_id)
                .map(|name| (*name).to_string());
            PostWithCategory {
                post,
                category_name,
            }
        })
        .collect()
}
