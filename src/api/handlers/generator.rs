// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use crate::core::config::Config;
use crate::generators::{self, build_alphabet};
use crate::models::{StrengthAssessment, StrengthRating};
use crate::api::types::{
    AnalysisQuery, PasswordAnalysisResponse, PasswordGenerationRequest,
    PasswordGenerationResponse, StrengthPreviewResponse,
};

/// Generate a password or PIN
///
/// Generates a password based on the provided options. Custom words are
/// shuffled and placed at the start of the password.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let options = generation_req.to_generation_config(&config);

    // Validate options
    if !config.length_in_bounds(options.length) {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(format!(
            "Length must be between {} and {} characters",
            config.min_password_length, config.max_password_length
        )));
    }

    let password = match generators::generate(&options) {
        Ok(pwd) => pwd,
        Err(e) => {
            log::warn!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()));
        }
    };

    let strength = generators::assess(&password.text, password.alphabet_size);
    log::info!(
        "Generated {} of length {} ({} rating)",
        options.mode,
        options.length,
        strength.rating
    );

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        length: Some(password.length),
        password: Some(password.text),
        strength: Some(strength),
        alphabet_size: Some(password.alphabet_size),
        generated_at: Some(Utc::now()),
        error: None,
    })
}

/// Preview the strength of a set of options
///
/// Returns the entropy a password generated with these options would have,
/// without generating one.
#[utoipa::path(
    post,
    path = "/generator/preview",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Strength preview", body = StrengthPreviewResponse),
        (status = 400, description = "Invalid options", body = StrengthPreviewResponse)
    )
)]
pub async fn preview_strength(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let options = generation_req.to_generation_config(&config);
    let alphabet_size = build_alphabet(&options).size();

    if alphabet_size == 0 {
        return HttpResponse::BadRequest().json(StrengthPreviewResponse {
            success: false,
            strength: None,
            alphabet_size,
            error: Some(generators::GeneratorError::EmptyAlphabet.to_string()),
        });
    }

    HttpResponse::Ok().json(StrengthPreviewResponse {
        success: true,
        strength: Some(generators::assess_config(&options)),
        alphabet_size,
        error: None,
    })
}

/// Analyze password strength
///
/// Estimates the entropy of a password. Without `alphabet_size` the alphabet
/// is inferred from the character classes the password contains.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze"),
        AnalysisQuery
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    path: web::Path<String>,
    query: web::Query<AnalysisQuery>,
) -> impl Responder {
    // The path extractor has already percent-decoded the segment
    let password = path.into_inner();

    let alphabet_size = query
        .alphabet_size
        .unwrap_or_else(|| generators::infer_alphabet_size(&password));
    let assessment = generators::assess(&password, alphabet_size);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        entropy_bits: assessment.entropy_bits,
        rating: assessment.rating,
        alphabet_size,
        feedback: feedback_for(&password, &assessment),
        error: None,
    })
}

fn feedback_for(password: &str, assessment: &StrengthAssessment) -> Vec<String> {
    let mut feedback = Vec::new();
    let length = password.chars().count();

    match assessment.rating {
        StrengthRating::Weak => {
            feedback.push("Weak password".to_string());
            feedback.push("Consider using a longer password with mixed character types".to_string());
        }
        StrengthRating::Fair => {
            feedback.push("Fair password".to_string());
            if length < 12 {
                feedback.push("Increase password length to at least 12 characters".to_string());
            }
        }
        StrengthRating::Good => {
            feedback.push("Good password".to_string());
            if length < 16 {
                feedback.push("For maximum security, consider increasing length to 16+ characters".to_string());
            }
        }
        StrengthRating::Strong => {
            feedback.push("Strong password".to_string());
        }
    }

    if assessment.rating < StrengthRating::Strong {
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            feedback.push("Add uppercase letters for better security".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            feedback.push("Add numbers for better security".to_string());
        }
        if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            feedback.push("Add symbols for better security".to_string());
        }
    }

    if let Some(hint) = sequence_hint(password) {
        feedback.push(hint.to_string());
    }

    feedback
}

// Entropy assumes independent characters; runs like "abc" or "123" break that
fn sequence_hint(password: &str) -> Option<&'static str> {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).find_map(|w| {
        let ascending = w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1;
        if !ascending {
            None
        } else if w.iter().all(|c| c.is_ascii_alphabetic()) {
            Some("Avoid using consecutive letters (e.g., 'abc')")
        } else if w.iter().all(|c| c.is_ascii_digit()) {
            Some("Avoid using consecutive numbers (e.g., '123')")
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::api::routes::configure_routes;
    use crate::generators::alphabet::DIGITS_UNAMBIGUOUS;
    use serde_json::{json, Value};

    macro_rules! app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generate_with_defaults() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["password"].as_str().unwrap().chars().count(), 16);
        assert_eq!(body["length"], 16);
        assert_eq!(body["alphabet_size"], 94);
        assert_eq!(body["strength"]["rating"], "strong");
    }

    #[actix_web::test]
    async fn generate_pin_without_ambiguous_digits() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({ "mode": "pin", "length": 6, "avoid_ambiguous": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let pin = body["password"].as_str().unwrap();
        assert_eq!(pin.len(), 6);
        assert!(pin.chars().all(|c| DIGITS_UNAMBIGUOUS.contains(c)));
        assert_eq!(body["alphabet_size"], 8);
    }

    #[actix_web::test]
    async fn generate_with_custom_word() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({
                "length": 10,
                "include_uppercase": false,
                "include_lowercase": false,
                "include_symbols": false,
                "custom_words": ["sun"]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert!(password.starts_with("sun"));
        assert!(password[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[actix_web::test]
    async fn generate_rejects_empty_alphabet() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({
                "include_uppercase": false,
                "include_lowercase": false,
                "include_numbers": false,
                "include_symbols": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["password"].is_null());
    }

    #[actix_web::test]
    async fn generate_rejects_out_of_bounds_length() {
        let app = app!(Config::default());
        for length in [0, 2, 129] {
            let req = test::TestRequest::post()
                .uri("/generator/password")
                .set_json(json!({ "length": length }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn preview_reports_config_entropy() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/preview")
            .set_json(json!({ "length": 12, "include_symbols": false }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["alphabet_size"], 62);
        assert_eq!(body["strength"]["rating"], "good");
        let bits = body["strength"]["entropy_bits"].as_f64().unwrap();
        assert!((bits - 71.45).abs() < 0.01);
    }

    #[actix_web::test]
    async fn analysis_infers_alphabet() {
        let app = app!(Config::default());
        let req = test::TestRequest::get()
            .uri("/generator/analysis/abc123")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["alphabet_size"], 36);
        assert_eq!(body["rating"], "fair");
        let feedback: Vec<String> = serde_json::from_value(body["feedback"].clone()).unwrap();
        assert!(feedback.iter().any(|f| f.contains("consecutive letters")));
    }

    #[actix_web::test]
    async fn analysis_uses_given_alphabet_size() {
        let app = app!(Config::default());
        let req = test::TestRequest::get()
            .uri("/generator/analysis/2468?alphabet_size=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["entropy_bits"], 0.0);
        assert_eq!(body["rating"], "weak");
    }

    #[actix_web::test]
    async fn preview_rejects_empty_alphabet() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/preview")
            .set_json(json!({
                "include_uppercase": false,
                "include_lowercase": false,
                "include_numbers": false,
                "include_symbols": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["alphabet_size"], 0);
        assert!(body["strength"].is_null());
    }

    #[actix_web::test]
    async fn analysis_keeps_literal_percent_sequences() {
        let app = app!(Config::default());
        // "ab%41cd" with its '%' escaped as %25
        let req = test::TestRequest::get()
            .uri("/generator/analysis/ab%2541cd?alphabet_size=94")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let bits = body["entropy_bits"].as_f64().unwrap();
        let expected = 7.0 * 94f64.log2();
        assert!((bits - expected).abs() < 1e-9, "{bits} != {expected}");
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = app!(Config::default());
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
    }

    #[::core::prelude::v1::test]
    fn sequence_hint_detects_runs() {
        assert!(sequence_hint("xx123yy").unwrap().contains("numbers"));
        assert!(sequence_hint("Qxyz!").unwrap().contains("letters"));
        assert!(sequence_hint("a1b2c3").is_none());
        assert!(sequence_hint("ab").is_none());
    }
}
