use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use axum_helpers::{JwtAuth, ValidatedJson};

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, LoginRequest, RegisterRequest, TokenResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Application state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Create the auth router exposing /register and /login
pub fn router<R: UserRepository + 'static>(state: AuthState<R>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

/// Register a new user and hand back a bearer token
///
/// POST /register
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    let user = state
        .service
        .create_user(CreateUser {
            name: input.name,
            email: input.email,
            password: input.password,
        })
        .await?;

    let token = state.jwt_auth.issue_token(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        UserError::Internal("Failed to issue token".to_string())
    })?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// Login with email/password
///
/// POST /login
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<TokenResponse>> {
    let user = state
        .service
        .authenticate(&input.email, &input.password)
        .await?;

    let token = state.jwt_auth.issue_token(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        UserError::Internal("Failed to issue token".to_string())
    })?;

    Ok(Json(TokenResponse { token }))
}
