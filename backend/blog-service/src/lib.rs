/// Blog Service Library
///
/// Read side of the blogging platform: assembles the denormalized post feed
/// from the user, post, comment, like and category collections.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Domain records and composed feed views
/// - `services`: Feed pipeline stages and orchestration
/// - `db`: Collection accessors (MongoDB and in-memory)
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
