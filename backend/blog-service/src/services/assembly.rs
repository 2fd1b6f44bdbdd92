//! Feed assembly: one composed record per post.

use std::collections::HashMap;

use crate::models::{CommentWithUser, LikeWithUser, PostFeedRecord, PostScoped, PostWithCategory};

/// Group records by parent post id in a single pass, keeping source order
/// within each group.
fn group_by_post<T: PostScoped>(items: Vec<T>) -> HashMap<String, Vec<T>> {
    let mut groups: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        groups
            .entry(item.parent_post_id().to_string())
            .or_default()
            .push(item);
    }
    groups
}

/// Combine enriched posts with their comments and likes.
///
/// Output follows post order. A comment or like lands in a record iff its
/// parent post id equals the post's `_id`; those referencing no post are
/// dropped. Inputs are consumed, never modified in place.
pub fn assemble_feed(
    posts: Vec<PostWithCategory>,
    comments: Vec<CommentWithUser>,
    likes: Vec<LikeWithUser>,
) -> Vec<PostFeedRecord> {
    let comments_by_post = group_by_post(comments);
    let likes_by_post = group_by_post(likes);

    posts
        .into_iter()
        .map(|post| {
            let post_id = post.id().to_string();
            let post_comments = comments_by_post.get(&post_id).cloned().unwrap_or_default();
            let post_like = likes_by_post.get(&post_id).cloned().unwrap_or_default();
            PostFeedRecord {
                post,
                post_comments,
                post_like,
                post_id,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, Like, OwnerFields, Post, WithOwner};
    use chrono::{Duration, TimeZone, Utc};

    fn owner(name: &str) -> OwnerFields {
        OwnerFields {
            user_full_name: name.into(),
            username: name.to_lowercase(),
            user_profile_photo: "Male.png".into(),
        }
    }

    fn post(id: &str) -> PostWithCategory {
        PostWithCategory {
            post: WithOwner {
                record: Post {
                    id: id.into(),
                    post_title: format!("Post {}", id),
                    post_description: "body".into(),
                    category_id: 1,
                    user_id: "u1".into(),
                    post_image: "img.png".into(),
                    post_date_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    post_status: "posted".into(),
                },
                owner: owner("Ada"),
            },
            category_name: Some("Travel".into()),
        }
    }

    fn comment(id: &str, post_id: &str, minute: i64) -> CommentWithUser {
        WithOwner {
            record: Comment {
                id: id.into(),
                comment_description: format!("comment {}", id),
                comment_date_time: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
                    + Duration::minutes(minute),
                user_id: "u2".into(),
                post_id: post_id.into(),
            },
            owner: owner("Grace"),
        }
    }

    fn like(id: &str, post_id: &str) -> LikeWithUser {
        WithOwner {
            record: Like {
                id: id.into(),
                user_id: "u2".into(),
                post_id: post_id.into(),
            },
            owner: owner("Grace"),
        }
    }

    #[test]
    fn groups_by_parent_post() {
        let feed = assemble_feed(
            vec![post("p1"), post("p2")],
            vec![
                comment("c1", "p2", 0),
                comment("c2", "p1", 1),
                comment("c3", "p2", 2),
            ],
            vec![like("l1", "p1")],
        );

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].post_id, "p1");
        let p1_comments: Vec<_> = feed[0]
            .post_comments
            .iter()
            .map(|c| c.record.id.as_str())
            .collect();
        assert_eq!(p1_comments, vec!["c2"]);
        assert_eq!(feed[0].post_like.len(), 1);

        assert_eq!(feed[1].post_id, "p2");
        let p2_comments: Vec<_> = feed[1]
            .post_comments
            .iter()
            .map(|c| c.record.id.as_str())
            .collect();
        assert_eq!(p2_comments, vec!["c1", "c3"]);
        assert!(feed[1].post_like.is_empty());
    }

    #[test]
    fn keeps_source_order_not_timestamp_order() {
        let feed = assemble_feed(
            vec![post("p1")],
            vec![comment("late", "p1", 30), comment("early", "p1", 0)],
            vec![],
        );

        let ids: Vec<_> = feed[0].post_comments.iter().map(|c| c.record.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn orphan_reactions_are_dropped() {
        let feed = assemble_feed(
            vec![post("p1")],
            vec![comment("c1", "gone", 0)],
            vec![like("l1", "gone")],
        );

        assert!(feed[0].post_comments.is_empty());
        assert!(feed[0].post_like.is_empty());
    }

    #[test]
    fn empty_posts_yield_empty_feed() {
        let feed = assemble_feed(vec![], vec![comment("c1", "p1", 0)], vec![like("l1", "p1")]);
        assert!(feed.is_empty());
    }

    #[test]
    fn post_id_mirrors_primary_id() {
        let feed = assemble_feed(vec![post("65e1f0c2a1b2c3d4e5f60718")], vec![], vec![]);
        assert_eq!(feed[0].post_id, feed[0].post.id());
    }
}
