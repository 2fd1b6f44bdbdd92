//! MongoDB client and collection accessors

use std::time::Duration;

use bson::doc;
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Collection};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::schemas::{
    CategoryDoc, CommentDoc, LikeDoc, PostDoc, UserDoc, CATEGORY_COLLECTION, COMMENT_COLLECTION,
    LIKE_COLLECTION, POST_COLLECTION, USER_COLLECTION,
};
use super::BlogStore;
use crate::error::{AppError, Result};
use crate::models::{Category, Comment, Like, Post, User};

/// Database used when neither the config nor the URI names one.
pub const DEFAULT_DATABASE: &str = "blog";

/// Pick the database: explicit name, then the URI path, then `DEFAULT_DATABASE`.
pub fn resolve_database_name(explicit: Option<&str>, options: &ClientOptions) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| options.default_database.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
}

/// MongoDB client wrapper
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db_name: String,
}

impl MongoClient {
    /// Connect and verify the deployment answers a `ping`.
    ///
    /// Server selection and connect timeouts are bounded so an unreachable
    /// store fails startup instead of hanging it.
    pub async fn connect(uri: &str, db_name: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            AppError::DependencyUnavailable(format!("Invalid MongoDB URI: {}", e))
        })?;
        let db_name = resolve_database_name(db_name, &options);
        info!(db = %db_name, "Connecting to MongoDB");

        options.app_name = Some("blog-service".to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(|e| {
            AppError::DependencyUnavailable(format!("Failed to create MongoDB client: {}", e))
        })?;

        let mongo = Self {
            client,
            db_name: db_name.clone(),
        };
        mongo.ping().await?;

        info!("Connected to MongoDB database '{}'", db_name);
        Ok(mongo)
    }

    pub async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DependencyUnavailable(format!("MongoDB ping failed: {}", e)))?;
        Ok(())
    }

    /// Get a typed collection
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.db_name).collection::<T>(name)
    }
}

/// `BlogStore` over the five blog collections.
#[derive(Clone)]
pub struct MongoBlogStore {
    client: MongoClient,
    users: Collection<UserDoc>,
    posts: Collection<PostDoc>,
    comments: Collection<CommentDoc>,
    likes: Collection<LikeDoc>,
    categories: Collection<CategoryDoc>,
}

impl MongoBlogStore {
    pub fn new(client: MongoClient) -> Self {
        Self {
            users: client.collection(USER_COLLECTION),
            posts: client.collection(POST_COLLECTION),
            comments: client.collection(COMMENT_COLLECTION),
            likes: client.collection(LIKE_COLLECTION),
            categories: client.collection(CATEGORY_COLLECTION),
            client,
        }
    }
}

/// Read a whole collection in natural order.
///
/// A cursor error, including a document that fails to decode, fails the read.
async fn find_all<D, T>(collection: &Collection<D>) -> Result<Vec<T>>
where
    D: DeserializeOwned + Unpin + Send + Sync,
    T: From<D>,
{
    let cursor = collection.find(doc! {}).await.map_err(|e| {
        AppError::DependencyUnavailable(format!(
            "Find on '{}' failed: {}",
            collection.name(),
            e
        ))
    })?;

    let docs: Vec<D> = cursor.try_collect().await.map_err(|e| {
        AppError::DependencyUnavailable(format!(
            "Reading '{}' failed: {}",
            collection.name(),
            e
        ))
    })?;

    debug!(collection = collection.name(), count = docs.len(), "collection read");
    Ok(docs.into_iter().map(T::from).collect())
}

#[async_trait::async_trait]
impl BlogStore for MongoBlogStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        find_all(&self.users).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        find_all(&self.posts).await
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        find_all(&self.comments).await
    }

    async fn list_likes(&self) -> Result<Vec<Like>> {
        find_all(&self.likes).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        find_all(&self.categories).await
    }

    async fn ping(&self) -> Result<()> {
        self.client.ping().await
    }
}
