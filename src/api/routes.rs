// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::system::health));

    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/preview", web::post().to(handlers::generator::preview_strength))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );
}
