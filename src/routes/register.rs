use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppError, Result},
    models::{NewUser, RegisterRequest, RegisterResponse},
    queries::user_queries,
    utils::extractors::{is_blank, is_valid_email, JsonBody},
    AppState,
};

pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    validate_registration(&payload)?;

    let email = field(&payload.email);

    if user_queries::find_by_email(&state.db, email)
        .await?
        .is_some()
    {
        return Err(AppError::Duplicate("Email already registered".to_string()));
    }

    let password = payload.password.as_deref().unwrap_or_default();
    let password_hash = bcrypt::hash(password, state.auth.bcrypt_cost)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    let user = user_queries::create_user(
        &state.db,
        &NewUser {
            first_name: field(&payload.first_name),
            last_name: field(&payload.last_name),
            email,
            password_hash: &password_hash,
            phone: field(&payload.phone),
            address: field(&payload.address),
            image_path: payload
                .image_path
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty()),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            id: user.id,
        }),
    ))
}

fn validate_registration(payload: &RegisterRequest) -> Result<()> {
    let required = [
        &payload.first_name,
        &payload.last_name,
        &payload.email,
        &payload.password,
        &payload.phone,
        &payload.address,
    ];

    if required.iter().any(|value| is_blank(value.as_deref())) {
        return Err(AppError::Validation(
            "All fields are required except for the image".to_string(),
        ));
    }

    if !is_valid_email(field(&payload.email)) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}
