use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::Event};

pub async fn get_all(pool: &PgPool) -> Result<Vec<Event>> {
    let events = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY start_date ASC")
        .fetch_all(pool)
        .await?;

    Ok(events)
}

pub async fn find_by_category(pool: &PgPool, category_code: &str) -> Result<Vec<Event>> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT * FROM events WHERE category_code = $1 ORDER BY start_date ASC",
    )
    .bind(category_code)
    .fetch_all(pool)
    .await?;

    Ok(events)
}

pub async fn create_event(
    pool: &PgPool,
    title: &str,
    description: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    image_url: Option<&str>,
    category_code: Option<&str>,
) -> Result<Event> {
    let event = sqlx::query_as::<_, Event>(
        "INSERT INTO events (id, title, description, start_date, end_date, image_url, category_code)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(description)
    .bind(start_date)
    .bind(end_date)
    .bind(image_url)
    .bind(category_code)
    .fetch_one(pool)
    .await?;

    Ok(event)
}
