use axum::{extract::State, Json};

use crate::{
    error::{AppError, Result},
    models::{LoginRequest, LoginResponse},
    queries::user_queries,
    utils::{
        extractors::{is_blank, JsonBody},
        jwt,
    },
    AppState,
};

pub async fn login_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (payload.email.as_deref(), payload.password.as_deref())
    else {
        return Err(missing_credentials());
    };
    if is_blank(Some(email)) || password.is_empty() {
        return Err(missing_credentials());
    }

    let user = user_queries::find_by_email(&state.db, email.trim())
        .await?
        .ok_or_else(|| AppError::Validation("User not found".to_string()))?;

    let is_valid = bcrypt::verify(password, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !is_valid {
        return Err(AppError::Validation("Invalid credentials".to_string()));
    }

    let token = jwt::generate_token(&state.auth, user.id, &user.email)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        username: user.first_name,
        message: "Login successful".to_string(),
    }))
}

fn missing_credentials() -> AppError {
    AppError::Validation("Email and password are required".to_string())
}
