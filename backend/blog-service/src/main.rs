use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use blog_service::db::{MongoBlogStore, MongoClient};
use blog_service::handlers::{self, FeedHandlerState};
use blog_service::services::FeedService;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,mongodb=warn".into());
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Blog Service
///
/// Serves the composed post feed and the joined views it is built from.
///
/// # Routes
///
/// - `/api/blogPost/allPost` - Posts with author, category, comments and likes
/// - `/api/blogPost/*WithUserInfo` - Intermediate joins
/// - `/api/blog/categoryList` - Categories
/// - `/api/v1/health`, `/metrics` - Operations
///
/// Runs on port 8080 (configurable via BLOG_SERVICE_PORT).
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Support container healthchecks via CLI subcommand: `healthcheck`
    {
        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "healthcheck" {
                let port = std::env::var("BLOG_SERVICE_PORT").unwrap_or_else(|_| "8080".into());
                let url = format!("http://127.0.0.1:{}/api/v1/health", port);
                return match reqwest::Client::new().get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => Ok(()),
                    Ok(resp) => {
                        eprintln!("healthcheck HTTP status: {}", resp.status());
                        Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
                    }
                    Err(e) => {
                        eprintln!("healthcheck HTTP error: {}", e);
                        Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
                    }
                };
            }
        }
    }

    dotenvy::dotenv().ok();
    init_tracing();

    // Load configuration
    let config = match blog_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    let policy = match config.feed.policy() {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("Invalid feed configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Missing-owner policy: {}", policy);

    let mongo = MongoClient::connect(
        &config.database.url,
        config.database.name.as_deref(),
        Duration::from_millis(config.database.timeout_ms),
    )
    .await
    .map_err(|e| {
        tracing::error!("MongoDB connection failed: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    let store = Arc::new(MongoBlogStore::new(mongo));
    let feed_state = web::Data::new(FeedHandlerState::new(FeedService::new(store, policy)));

    let http_bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in cors_config.origins() {
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(feed_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .bind(&http_bind_address)?
    .run()
    .await?;

    tracing::info!("Blog-service shutting down");
    Ok(())
}
