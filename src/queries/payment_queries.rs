use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::PaymentMethod, queries::missing_user};

/// Returns false when the card number is already on file for this user.
pub async fn add_payment_method(
    pool: &PgPool,
    user_id: Uuid,
    method: &PaymentMethod,
) -> Result<bool> {
    let result = sqlx::query(
        "INSERT INTO payment_methods (user_id, card_number, exp_date, cvv, country)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (user_id, card_number) DO NOTHING",
    )
    .bind(user_id)
    .bind(&method.card_number)
    .bind(&method.exp_date)
    .bind(&method.cvv)
    .bind(&method.country)
    .execute(pool)
    .await
    .map_err(|e| missing_user(e, "user_id"))?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_payment_methods(pool: &PgPool, user_id: Uuid) -> Result<Vec<PaymentMethod>> {
    let methods = sqlx::query_as::<_, PaymentMethod>(
        "SELECT card_number, exp_date, cvv, country
         FROM payment_methods
         WHERE user_id = $1
         ORDER BY id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(methods)
}
