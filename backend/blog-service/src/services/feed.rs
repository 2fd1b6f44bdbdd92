//! Feed orchestration.
//!
//! The five collections are read concurrently; every stage after that runs
//! strictly in sequence on fully materialized input:
//! join(posts) -> category enrichment -> join(comments) -> join(likes) -> assembly.
//! The first error aborts the request and no partial feed is returned.

use std::sync::Arc;

use tracing::{debug, error};

use crate::db::BlogStore;
use crate::error::Result;
use crate::metrics::feed::{
    FEED_REQUEST_DURATION_SECONDS, FEED_REQUEST_TOTAL, FEED_STAGE_DURATION_SECONDS,
};
use crate::models::{
    Category, Comment, CommentWithUser, Joined, Like, LikeWithUser, Post, PostFeedRecord,
    PostInformation, PostWithCategory,
};
use crate::services::assembly::assemble_feed;
use crate::services::category::enrich_categories;
use crate::services::join::{
    attach_owner_keeping_details, join_owner, join_users, MissingOwnerPolicy,
};

const POST: &str = "post";
const COMMENT: &str = "comment";
const LIKE: &str = "like";

fn stage<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let _timer = FEED_STAGE_DURATION_SECONDS
        .with_label_values(&[name])
        .start_timer();
    f()
}

/// Composes posts, users, categories, comments and likes into feed records.
#[derive(Clone)]
pub struct FeedService {
    store: Arc<dyn BlogStore>,
    policy: MissingOwnerPolicy,
}

impl FeedService {
    pub fn new(store: Arc<dyn BlogStore>, policy: MissingOwnerPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> MissingOwnerPolicy {
        self.policy
    }

    pub fn store(&self) -> &Arc<dyn BlogStore> {
        &self.store
    }

    /// Build the full feed, one record per post in post-collection order.
    pub async fn get_feed(&self) -> Result<Vec<PostFeedRecord>> {
        let timer = FEED_REQUEST_DURATION_SECONDS.start_timer();
        let result = self.build_feed().await;
        timer.observe_duration();

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => {
                error!(error = %e, kind = e.kind(), "feed assembly failed");
                e.kind()
            }
        };
        FEED_REQUEST_TOTAL.with_label_values(&[outcome]).inc();

        result
    }

    async fn build_feed(&self) -> Result<Vec<PostFeedRecord>> {
        let read_timer = FEED_STAGE_DURATION_SECONDS
            .with_label_values(&["read"])
            .start_timer();
        let (users, posts, comments, likes, categories) = tokio::try_join!(
            self.store.list_users(),
            self.store.list_posts(),
            self.store.list_comments(),
            self.store.list_likes(),
            self.store.list_categories(),
        )?;
        read_timer.observe_duration();

        debug!(
            users = users.len(),
            posts = posts.len(),
            comments = comments.len(),
            likes = likes.len(),
            categories = categories.len(),
            "feed sources loaded"
        );

        let posts = stage("join_posts", || join_owner(posts, &users, self.policy, POST))?;
        let posts = stage("enrich_categories", || enrich_categories(posts, &categories));
        let comments = stage("join_comments", || {
            join_owner(comments, &users, self.policy, COMMENT)
        })?;
        let likes = stage("join_likes", || join_owner(likes, &users, self.policy, LIKE))?;
        let feed = stage("assemble", || assemble_feed(posts, comments, likes));

        debug!(records = feed.len(), "feed assembled");
        Ok(feed)
    }

    /// Posts with every matching user under `userDetails`.
    pub async fn posts_with_user_details(&self) -> Result<Vec<Joined<Post>>> {
        let (users, posts) = tokio::try_join!(self.store.list_users(), self.store.list_posts())?;
        Ok(join_users(posts, &users))
    }

    /// Posts keeping `userDetails`, plus the first match flattened into owner columns.
    pub async fn post_information(&self) -> Result<Vec<PostInformation>> {
        let (users, posts) = tokio::try_join!(self.store.list_users(), self.store.list_posts())?;
        attach_owner_keeping_details(join_users(posts, &users), self.policy, POST)
    }

    /// Posts with owner columns and, when the category resolves, `categoryName`.
    pub async fn posts_with_category(&self) -> Result<Vec<PostWithCategory>> {
        let (users, posts, categories) = tokio::try_join!(
            self.store.list_users(),
            self.store.list_posts(),
            self.store.list_categories(),
        )?;
        let posts = join_owner(posts, &users, self.policy, POST)?;
        Ok(enrich_categories(posts, &categories))
    }

    pub async fn comments_with_user_details(&self) -> Result<Vec<Joined<Comment>>> {
        let (users, comments) =
            tokio::try_join!(self.store.list_users(), self.store.list_comments())?;
        Ok(join_users(comments, &users))
    }

    pub async fn comments_with_user(&self) -> Result<Vec<CommentWithUser>> {
        let (users, comments) =
            tokio::try_join!(self.store.list_users(), self.store.list_comments())?;
        join_owner(comments, &users, self.policy, COMMENT)
    }

    pub async fn likes_with_user_details(&self) -> Result<Vec<Joined<Like>>> {
        let (users, likes) = tokio::try_join!(self.store.list_users(), self.store.list_likes())?;
        Ok(join_users(likes, &users))
    }

    pub async fn likes_with_user(&self) -> Result<Vec<LikeWithUser>> {
        let (users, likes) = tokio::try_join!(self.store.list_users(), self.store.list_likes())?;
        join_owner(likes, &users, self.policy, LIKE)
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.store.list_categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryBlogStore;
    use crate::error::AppError;
    use crate::models::User;
    use chrono::{TimeZone, Utc};

    fn store() -> InMemoryBlogStore {
        InMemoryBlogStore::new()
            .with_users(vec![User {
                id: "u1".into(),
                full_name: "A B".into(),
                username: "ab".into(),
                user_profile_photo: "Male.png".into(),
            }])
            .with_posts(vec![Post {
                id: "p10".into(),
                post_title: "T".into(),
                post_description: "D".into(),
                category_id: 5,
                user_id: "u1".into(),
                post_image: "t.png".into(),
                post_date_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
                post_status: "posted".into(),
            }])
            .with_categories(vec![Category {
                id: "cat5".into(),
                category_id: 5,
                category_name: "Tech".into(),
                category_description: "Technology".into(),
            }])
            .with_comments(vec![Comment {
                id: "c100".into(),
                comment_description: "hi".into(),
                comment_date_time: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
                user_id: "u1".into(),
                post_id: "p10".into(),
            }])
    }

    #[tokio::test]
    async fn composes_single_post_scenario() {
        let service = FeedService::new(Arc::new(store()), MissingOwnerPolicy::Fail);
        let feed = service.get_feed().await.unwrap();

        assert_eq!(feed.len(), 1);
        let record = &feed[0];
        assert_eq!(record.post_id, "p10");
        assert_eq!(record.post.post.record.post_title, "T");
        assert_eq!(record.post.post.owner.user_full_name, "A B");
        assert_eq!(record.post.post.owner.username, "ab");
        assert_eq!(record.post.category_name.as_deref(), Some("Tech"));
        assert_eq!(record.post_comments.len(), 1);
        assert_eq!(record.post_comments[0].record.comment_description, "hi");
        assert!(record.post_like.is_empty());
    }

    #[tokio::test]
    async fn missing_post_owner_fails_under_fail_policy() {
        let mut fixture = store();
        fixture.posts[0].user_id = "u99".into();
        let service = FeedService::new(Arc::new(fixture), MissingOwnerPolicy::Fail);

        let err = service.get_feed().await.unwrap_err();
        assert!(matches!(err, AppError::DataIntegrity(_)));
    }

    #[tokio::test]
    async fn missing_post_owner_is_skipped_under_skip_policy() {
        let mut fixture = store();
        fixture.posts[0].user_id = "u99".into();
        let service = FeedService::new(Arc::new(fixture), MissingOwnerPolicy::Skip);

        let feed = service.get_feed().await.unwrap();
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn raw_join_view_keeps_unmatched_records() {
        let mut fixture = store();
        fixture.comments[0].user_id = "u99".into();
        let service = FeedService::new(Arc::new(fixture), MissingOwnerPolicy::Fail);

        let joined = service.comments_with_user_details().await.unwrap();
        assert_eq!(joined.len(), 1);
        assert!(joined[0].user_details.is_empty());
    }
}
