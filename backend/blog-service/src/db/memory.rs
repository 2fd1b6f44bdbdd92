use crate::error::Result;
use crate::models::{Category, Comment, Like, Post, User};

use super::BlogStore;

/// Vector-backed store. Reads return clones in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlogStore {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub likes: Vec<Like>,
    pub categories: Vec<Category>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_likes(mut self, likes: Vec<Like>) -> Self {
        self.likes = likes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }
}

#[async_trait::async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.comments.clone())
    }

    async fn list_likes(&self) -> Result<Vec<Like>> {
        Ok(self.likes.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }
}
