/// Database access layer
///
/// This module provides:
/// - `BlogStore`: read-only collection accessors consumed by the feed pipeline
/// - `MongoBlogStore`: MongoDB-backed implementation
/// - `InMemoryBlogStore`: fixture implementation for tests and demos
pub mod memory;
pub mod mongo;
pub mod schemas;

pub use memory::InMemoryBlogStore;
pub use mongo::{MongoBlogStore, MongoClient};

use crate::error::Result;
use crate::models::{Category, Comment, Like, Post, User};

/// Read-only accessors for the five blog collections.
///
/// Every call is a single bounded read of a whole collection in natural
/// order. Implementations report failures as `AppError::DependencyUnavailable`.
#[async_trait::async_trait]
pub trait BlogStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn list_comments(&self) -> Result<Vec<Comment>>;

    async fn list_likes(&self) -> Result<Vec<Like>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Cheap reachability probe for health checks
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
