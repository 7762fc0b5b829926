// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use crate::api::types::SuccessResponse;

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is running", body = SuccessResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(SuccessResponse {
        success: true,
        message: Some(format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))),
        error: None,
    })
}
