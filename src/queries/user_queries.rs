use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{NewUser, UpdateProfileRequest, User},
    queries::is_unique_violation,
};

pub async fn create_user(pool: &PgPool, new_user: &NewUser<'_>) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, first_name, last_name, email, password, phone, address, image_path)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(new_user.first_name)
    .bind(new_user.last_name)
    .bind(new_user.email)
    .bind(new_user.password_hash)
    .bind(new_user.phone)
    .bind(new_user.address)
    .bind(new_user.image_path)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate("Email already registered".to_string())
        } else {
            e.into()
        }
    })?;

    Ok(user)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Applies the fields present in `req`; absent fields keep their value.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateProfileRequest,
) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            email = COALESCE($4, email),
            phone = COALESCE($5, phone),
            image_path = COALESCE($6, image_path),
            updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.email)
    .bind(&req.phone)
    .bind(&req.image_path)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate("Email already registered".to_string())
        } else {
            e.into()
        }
    })?;

    Ok(user)
}

pub async fn update_theme(pool: &PgPool, id: Uuid, theme: &str) -> Result<Option<String>> {
    let theme = sqlx::query_scalar::<_, String>(
        "UPDATE users SET theme = $2, updated_at = NOW() WHERE id = $1 RETURNING theme",
    )
    .bind(id)
    .bind(theme)
    .fetch_optional(pool)
    .await?;

    Ok(theme)
}

pub async fn update_password(pool: &PgPool, id: Uuid, password_hash: &str) -> Result<bool> {
    let result =
        sqlx::query("UPDATE users SET password = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;

    Ok(result.rows_affected() > 0)
}
