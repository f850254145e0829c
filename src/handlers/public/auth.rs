use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::ValidJson;
use crate::auth::{AccessToken, AuthError};
use crate::error::ApiError;
use crate::state::AuthState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// OAuth2 password-flow form fields. Extra fields (`grant_type`, `scope`) are ignored.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// POST /register - create a user account
///
/// Input: `{"username": "string", "password": "string"}`
/// Output: `{"msg": "User registered"}`
pub async fn register(
    State(state): State<AuthState>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> Result<Json<Value>, ApiError> {
    state.users.register(&payload.username, &payload.password).await?;
    Ok(Json(json!({ "msg": "User registered" })))
}

/// POST /login - exchange form-encoded credentials for a bearer token
pub async fn login(
    State(state): State<AuthState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Json<AccessToken>, ApiError> {
    let Form(credentials) = form?;

    let username = match state.users.authenticate(&credentials.username, &credentials.password).await {
        Ok(username) => username,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Failed login attempt for '{}'", credentials.username.trim());
            return Err(AuthError::InvalidCredentials.into());
        }
        Err(e) => return Err(e.into()),
    };

    let token = state.tokens.issue(&username)?;
    tracing::info!("Issued access token for '{}'", username);
    Ok(Json(token))
}
