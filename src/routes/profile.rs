use axum::{extract::State, Extension, Json};

use crate::{
    error::{AppError, Result},
    models::{
        ChangePasswordRequest, MessageResponse, ThemeRequest, ThemeResponse, UpdateProfileRequest,
        User, UserProfile,
    },
    queries::user_queries,
    utils::{
        extractors::{extract_user_id, is_blank, is_valid_email, JsonBody},
        jwt::Claims,
    },
    AppState,
};

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserProfile>> {
    let user = current_user(&state, &claims).await?;
    Ok(Json(user.into()))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(mut payload): JsonBody<UpdateProfileRequest>,
) -> Result<Json<UserProfile>> {
    let user_id = extract_user_id(&claims)?;

    // Blank strings mean "leave unchanged", never "erase".
    for field in [
        &mut payload.first_name,
        &mut payload.last_name,
        &mut payload.email,
        &mut payload.phone,
        &mut payload.image_path,
    ] {
        if is_blank(field.as_deref()) {
            *field = None;
        } else if let Some(value) = field.as_mut() {
            *value = value.trim().to_string();
        }
    }

    if payload.email.as_deref().is_some_and(|email| !is_valid_email(email)) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let user = user_queries::update_profile(&state.db, user_id, &payload)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(user.into()))
}

pub async fn get_theme(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ThemeResponse>> {
    let user = current_user(&state, &claims).await?;
    Ok(Json(ThemeResponse { theme: user.theme }))
}

pub async fn update_theme(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<ThemeRequest>,
) -> Result<Json<ThemeResponse>> {
    let user_id = extract_user_id(&claims)?;

    let theme = payload
        .theme
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Theme value is required".to_string()))?;

    let theme = user_queries::update_theme(&state.db, user_id, theme)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(ThemeResponse { theme }))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>> {
    let (Some(old_password), Some(new_password)) = (
        payload.old_password.as_deref().filter(|p| !p.is_empty()),
        payload.new_password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::Validation(
            "Both old and new passwords are required".to_string(),
        ));
    };

    let user = current_user(&state, &claims).await?;

    let is_match = bcrypt::verify(old_password, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !is_match {
        return Err(AppError::Validation("Incorrect old password".to_string()));
    }

    let password_hash = bcrypt::hash(new_password, state.auth.bcrypt_cost)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    if !user_queries::update_password(&state.db, user.id, &password_hash).await? {
        return Err(user_not_found());
    }

    tracing::info!(user_id = %user.id, "Password changed");

    Ok(Json(MessageResponse {
        message: "Password changed successfully".to_string(),
    }))
}

async fn current_user(state: &AppState, claims: &Claims) -> Result<User> {
    let user_id = extract_user_id(claims)?;
    user_queries::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(user_not_found)
}

pub(crate) fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
