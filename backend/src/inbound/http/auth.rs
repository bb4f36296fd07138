//! Registration and login handlers.
//!
//! ```text
//! POST /api/auth/register {"email":"ada@example.com","password":"secret","fullName":"Ada","userType":"student"}
//! POST /api/auth/login {"email":"ada@example.com","password":"secret"}
//! ```
//!
//! Both endpoints answer with `{"user": {...}}`; the password hash never
//! leaves the domain.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::{
    CredentialsValidationError, Error, LoginCredentials, RegistrationRequest, User, UserType,
    UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// `student` or `teacher`.
    #[schema(example = "student")]
    pub user_type: String,
}

impl TryFrom<RegisterRequest> for RegistrationRequest {
    type Error = CredentialsValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        let user_type: UserType = value.user_type.parse()?;
        Self::try_from_parts(&value.email, &value.password, &value.full_name, user_type)
    }
}

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = CredentialsValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Public view of a user.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "student")]
    pub user_type: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            email: user.email().as_ref().to_owned(),
            full_name: user.full_name().as_ref().to_owned(),
            user_type: user.user_type().to_string(),
        }
    }
}

/// Envelope returned by the auth endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
}

impl From<&User> for AuthResponse {
    fn from(user: &User) -> Self {
        Self { user: user.into() }
    }
}

const INVALID_CREDENTIALS: &str = "invalid email or password";

fn map_credentials_validation_error(err: CredentialsValidationError) -> Error {
    let (field, code) = match &err {
        CredentialsValidationError::EmptyPassword => ("password", "empty_password"),
        CredentialsValidationError::User(UserValidationError::EmptyEmail) => {
            ("email", "empty_email")
        }
        CredentialsValidationError::User(UserValidationError::InvalidEmail) => {
            ("email", "invalid_email")
        }
        CredentialsValidationError::User(UserValidationError::EmptyFullName) => {
            ("fullName", "empty_full_name")
        }
        CredentialsValidationError::User(UserValidationError::UnknownUserType) => {
            ("userType", "unknown_user_type")
        }
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered user", body = AuthResponse),
        (status = 400, description = "Invalid request or email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    let request = RegistrationRequest::try_from(payload.into_inner())
        .map_err(map_credentials_validation_error)?;
    let user = state.registration.register(&request).await?;
    Ok(web::Json(AuthResponse::from(&user)))
}

/// Authenticate with email and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated user", body = AuthResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    // Ill-formed credentials cannot match a stored user.
    let credentials = LoginCredentials::try_from(payload.into_inner()).map_err(|err| {
        debug!(reason = %err, "login rejected: credentials not well formed");
        Error::unauthorized(INVALID_CREDENTIALS)
    })?;
    let user = state.login.authenticate(&credentials).await?;
    Ok(web::Json(AuthResponse::from(&user)))
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
