use actix_web::{http::header::ContentType, web, HttpResponse};

use hrm_core::repositories::{AccountRepository, DeviceRepository, TokenRepository};
use hrm_core::services::{GeoLocationServiceTrait, NotificationServiceTrait};

use crate::handlers::ApiError;
use crate::state::AppState;

const VERIFICATION_SUCCESS_HTML: &str = include_str!("../../../templates/verification_success.html");

/// Handler for GET /api/v1/auth/verifysignup/{token}
///
/// Opened from the link in the verification email. Activates the account
/// and consumes the token.
///
/// ## Success (200 OK)
/// HTML confirmation page
///
/// ## Errors
/// - 400: token unknown, expired or already used
/// - 404: token belongs to an account that no longer exists
/// - 500: storage failure
pub async fn verify_signup<A, D, T, N, G>(
    state: web::Data<AppState<A, D, T, N, G>>,
    token: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    D: DeviceRepository + 'static,
    T: TokenRepository + 'static,
    N: NotificationServiceTrait + 'static,
    G: GeoLocationServiceTrait + 'static,
{
    state
        .verification_service
        .verify_signup(&token.into_inner())
        .await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(VERIFICATION_SUCCESS_HTML))
}
