use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use hrm_core::repositories::{AccountRepository, DeviceRepository, TokenRepository};
use hrm_core::services::{GeoLocationServiceTrait, NotificationServiceTrait};

use super::extract_client_ip;
use crate::dto::{SignupRequest, SignupResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Registers an employee, sends the verification email and returns a
/// session token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "firstName": "Jane",
///     "lastName": "Doe",
///     "email": "jane@corp.com",
///     "password": "Abcdef1!",
///     "deviceToken": "fcm-token",
///     "deviceType": "android"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "status": 201,
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ...",
///     "employee": {
///         "id": "550e8400-e29b-41d4-a716-446655440000",
///         "firstName": "Jane",
///         "lastName": "Doe",
///         "email": "jane@corp.com",
///         "role": "Employee"
///     }
/// }
/// ```
///
/// ## Errors
/// - 400: missing or invalid fields
/// - 409: email already registered
/// - 500: storage, signing or email delivery failure
pub async fn signup<A, D, T, N, G>(
    req: HttpRequest,
    state: web::Data<AppState<A, D, T, N, G>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    D: DeviceRepository + 'static,
    T: TokenRepository + 'static,
    N: NotificationServiceTrait + 'static,
    G: GeoLocationServiceTrait + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let client_ip = extract_client_ip(&req);

    let result = state
        .registration_service
        .sign_up(request.into(), client_ip.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(SignupResponse::from(result)))
}
