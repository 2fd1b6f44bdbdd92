use actix_web::{web, HttpResponse};
use std::time::Instant;

use super::FeedHandlerState;

pub async fn health_summary(state: web::Data<FeedHandlerState>) -> HttpResponse {
    let start = Instant::now();
    let result = state.feed.store().ping().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION"),
            "latency_ms": latency_ms,
        })),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": e.to_string(),
                "service": "blog-service",
            }))
        }
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
