#![allow(dead_code)]

use blog_service::db::BlogStore;
use blog_service::models::{Category, Comment, Like, Post, User};
use blog_service::{AppError, Result};
use chrono::{Duration, TimeZone, Utc};

pub fn user(id: &str, full_name: &str, username: &str) -> User {
    User {
        id: id.into(),
        full_name: full_name.into(),
        username: username.into(),
        user_profile_photo: format!("{}.png", username),
    }
}

pub fn post(id: &str, owner: &str, category_id: i64, title: &str) -> Post {
    Post {
        id: id.into(),
        post_title: title.into(),
        post_description: format!("{} body", title),
        category_id,
        user_id: owner.into(),
        post_image: format!("{}.jpg", id),
        post_date_time: Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
        post_status: "posted".into(),
    }
}

pub fn comment(id: &str, post_id: &str, owner: &str, text: &str, minute: i64) -> Comment {
    Comment {
        id: id.into(),
        comment_description: text.into(),
        comment_date_time: Utc.with_ymd_and_hms(2024, 4, 1, 11, 0, 0).unwrap()
            + Duration::minutes(minute),
        user_id: owner.into(),
        post_id: post_id.into(),
    }
}

pub fn like(id: &str, post_id: &str, owner: &str) -> Like {
    Like {
        id: id.into(),
        user_id: owner.into(),
        post_id: post_id.into(),
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: format!("cat{}", id),
        category_id: id,
        category_name: name.into(),
        category_description: format!("Posts about {}", name),
    }
}

/// Store whose selected collection is unreachable.
pub struct FailingStore {
    pub inner: blog_service::db::InMemoryBlogStore,
    pub failing: &'static str,
}

impl FailingStore {
    fn check(&self, collection: &str) -> Result<()> {
        if self.failing == collection {
            Err(AppError::DependencyUnavailable(format!(
                "{} collection unreachable",
                collection
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl BlogStore for FailingStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.check("users")?;
        self.inner.list_users().await
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.check("posts")?;
        self.inner.list_posts().await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        self.check("comments")?;
        self.inner.list_comments().await
    }

    async fn list_likes(&self) -> Result<Vec<Like>> {
        self.check("likes")?;
        self.inner.list_likes().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check("categories")?;
        self.inner.list_categories().await
    }

    async fn ping(&self) -> Result<()> {
        self.check("ping")
    }
}
