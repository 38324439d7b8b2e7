use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{NewOrder, Order},
    queries::missing_user,
};

pub async fn create_order(pool: &PgPool, new_order: &NewOrder<'_>) -> Result<Order> {
    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (id, user_id, product_id, shipping_address, payment_method, quantity, total_price)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(new_order.user_id)
    .bind(new_order.draft.product_id)
    .bind(&new_order.draft.shipping_address)
    .bind(&new_order.draft.payment_method)
    .bind(new_order.draft.quantity)
    .bind(new_order.total_price)
    .fetch_one(pool)
    .await
    .map_err(|e| missing_user(e, "user_id"))?;

    Ok(order)
}

pub async fn get_user_orders(pool: &PgPool, user_id: Uuid) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE user_id = $1 ORDER BY order_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(orders)
}
