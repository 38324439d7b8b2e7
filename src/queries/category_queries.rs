use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::Category,
    queries::is_unique_violation,
};

/// Get all categories
pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY title ASC")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// Find category by its unique code
pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Create a new category
pub async fn create_category(
    pool: &PgPool,
    title: &str,
    sub_title: &str,
    code: &str,
    image_url: &str,
) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (id, title, sub_title, code, image_url)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(sub_title)
    .bind(code)
    .bind(image_url)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Duplicate("Category code already exists".to_string())
        } else {
            e.into()
        }
    })?;

    Ok(category)
}
