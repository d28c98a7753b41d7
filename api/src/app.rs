//! Application factory
//!
//! Builds the Actix-web application from prepared state so the binary and
//! the integration tests run the same routing table.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use hrm_core::repositories::{AccountRepository, DeviceRepository, TokenRepository};
use hrm_core::services::{GeoLocationServiceTrait, NotificationServiceTrait};
use hrm_shared::{error_codes, HealthResponse, HealthStatus};

use crate::dto::ErrorResponse;
use crate::handlers::json_error_handler;
use crate::routes::auth::{signup::signup, verify_signup::verify_signup};
use crate::state::{AppState, HealthState};

pub const SERVICE_NAME: &str = "plushrm-api";

/// Create and configure the application with all dependencies
pub fn create_app<A, D, T, N, G>(
    app_state: web::Data<AppState<A, D, T, N, G>>,
    health_state: web::Data<HealthState>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    D: DeviceRepository + 'static,
    T: TokenRepository + 'static,
    N: NotificationServiceTrait + 'static,
    G: GeoLocationServiceTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(health_state)
        .app_data(json_config)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<A, D, T, N, G>))
                        .route(
                            "/verifysignup/{token}",
                            web::get().to(verify_signup::<A, D, T, N, G>),
                        ),
                )
                .route("", web::get().to(api_documentation))
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Probes the database when one is configured.
async fn health_check(health: web::Data<HealthState>) -> HttpResponse {
    let response = HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    let Some(database) = &health.database else {
        return HttpResponse::Ok().json(response);
    };

    match database.health_check().await {
        Ok(true) => HttpResponse::Ok().json(response),
        Ok(false) => HttpResponse::ServiceUnavailable().json(response.with_status(HealthStatus::Degraded)),
        Err(e) => {
            tracing::error!(error = %e, "Health check: database unreachable");
            HttpResponse::ServiceUnavailable().json(response.with_status(HealthStatus::Unhealthy))
        }
    }
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to PlusHRM API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "signup": {
                    "path": "/api/v1/auth/signup",
                    "method": "POST",
                    "description": "Register an employee and send a verification email",
                    "request_body": {
                        "firstName": "string",
                        "lastName": "string",
                        "email": "string",
                        "password": "string (8+ chars, upper, lower, digit, special)",
                        "deviceToken": "string",
                        "deviceType": "string ('android', 'ios' or 'web')"
                    },
                    "responses": {
                        "201": "Account created, returns tokens and employee",
                        "400": "Missing or invalid fields",
                        "409": "Email already registered",
                        "500": "Server or email delivery failure"
                    }
                },
                "verify_signup": {
                    "path": "/api/v1/auth/verifysignup/{token}",
                    "method": "GET",
                    "description": "Confirm an email address from the emailed link",
                    "responses": {
                        "200": "HTML confirmation page",
                        "400": "Invalid or expired token",
                        "404": "Employee not found"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
