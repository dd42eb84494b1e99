use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;

use crate::constants::START_TIME;

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio Web API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    let now = Utc::now();
    let uptime_seconds = (now - *START_TIME).num_seconds();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Server is running",
        "timestamp": now.to_rfc3339(),
        "uptimeSeconds": uptime_seconds,
    }))
}

/// Transport-level 404, distinct from resource-level NotFound.
pub async fn route_not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "Route not found",
    }))
}
