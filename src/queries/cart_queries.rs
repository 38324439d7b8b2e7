use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{CartEntry, CartItem},
    queries::missing_user,
};

/// Inserts the product with quantity 1, or bumps the existing line by one.
/// Runs as a single statement so concurrent adds cannot lose an increment.
pub async fn add_or_increment(pool: &PgPool, user_id: Uuid, product_id: Uuid) -> Result<i32> {
    let quantity = sqlx::query_scalar::<_, i32>(
        "INSERT INTO cart_items (user_id, product_id, quantity)
         VALUES ($1, $2, 1)
         ON CONFLICT (user_id, product_id)
         DO UPDATE SET quantity = cart_items.quantity + 1
         RETURNING quantity",
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(pool)
    .await
    .map_err(|e| missing_user(e, "user_id"))?;

    Ok(quantity)
}

/// Returns false when the product was not in the cart.
pub async fn remove(pool: &PgPool, user_id: Uuid, product_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_items(pool: &PgPool, user_id: Uuid) -> Result<Vec<CartItem>> {
    let items = sqlx::query_as::<_, CartItem>(
        "SELECT product_id, quantity FROM cart_items WHERE user_id = $1 ORDER BY id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

pub async fn get_entries(pool: &PgPool, user_id: Uuid) -> Result<Vec<CartEntry>> {
    let entries = sqlx::query_as::<_, CartEntry>(
        "SELECT p.*, c.quantity
         FROM cart_items c
         INNER JOIN products p ON p.id = c.product_id
         WHERE c.user_id = $1
         ORDER BY c.id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}
