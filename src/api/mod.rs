// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::preview_strength,
        crate::api::handlers::generator::analyze_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::SuccessResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::StrengthPreviewResponse,
            crate::api::types::PasswordAnalysisResponse,

            // Generator models
            crate::models::GenerationMode,
            crate::models::CharClass,
            crate::models::StrengthAssessment,
            crate::models::StrengthRating
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints"),
        (name = "System", description = "System status and utilities")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Password & PIN generator with entropy-based strength estimates",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.api_address.clone();
    let port = config.api_port;
    log::info!("Starting Passforge API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
