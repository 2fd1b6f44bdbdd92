/// Business logic layer for blog-service
///
/// The feed pipeline is split into pure stages plus one orchestrator:
/// - `join`: owner join and owner flattening
/// - `category`: category name enrichment
/// - `assembly`: grouping comments and likes under their post
/// - `feed`: reads the collections and runs the stages in order
pub mod assembly;
pub mod category;
pub mod feed;
pub mod join;

// Re-export commonly used services
pub use feed::FeedService;
pub use join::MissingOwnerPolicy;
