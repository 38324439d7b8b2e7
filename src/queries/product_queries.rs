use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::Product, queries::missing_user};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products
         WHERE ($1::varchar IS NULL OR category_code = $1)
         ORDER BY created_at DESC",
    )
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn create_product(
    pool: &PgPool,
    seller_id: Uuid,
    title: &str,
    description: &str,
    price: Decimal,
    image_path: Option<&str>,
    category: Option<&str>,
) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (id, title, description, price, image_path, category_code, seller_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(description)
    .bind(price)
    .bind(image_path)
    .bind(category)
    .bind(seller_id)
    .fetch_one(pool)
    .await
    .map_err(|e| missing_user(e, "seller_id"))?;

    Ok(product)
}
