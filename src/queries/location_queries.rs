use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::Result, models::Location, queries::missing_user};

pub async fn add_location(pool: &PgPool, user_id: Uuid, location: &Location) -> Result<Location> {
    let location = sqlx::query_as::<_, Location>(
        "INSERT INTO locations (user_id, city, radius) VALUES ($1, $2, $3) RETURNING city, radius",
    )
    .bind(user_id)
    .bind(&location.city)
    .bind(&location.radius)
    .fetch_one(pool)
    .await
    .map_err(|e| missing_user(e, "user_id"))?;

    Ok(location)
}

pub async fn replace_locations(
    pool: &PgPool,
    user_id: Uuid,
    locations: &[Location],
) -> Result<Vec<Location>> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM locations WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    let cities: Vec<&str> = locations.iter().map(|l| l.city.as_str()).collect();
    let radii: Vec<&str> = locations.iter().map(|l| l.radius.as_str()).collect();

    sqlx::query(
        "INSERT INTO locations (user_id, city, radius)
         SELECT $1, city, radius
         FROM unnest($2::varchar[], $3::varchar[]) WITH ORDINALITY AS t(city, radius, ord)
         ORDER BY ord",
    )
    .bind(user_id)
    .bind(&cities)
    .bind(&radii)
    .execute(&mut *tx)
    .await
    .map_err(|e| missing_user(e, "user_id"))?;

    tx.commit().await?;

    get_locations(pool, user_id).await
}

pub async fn get_locations(pool: &PgPool, user_id: Uuid) -> Result<Vec<Location>> {
    let locations = sqlx::query_as::<_, Location>(
        "SELECT city, radius FROM locations WHERE user_id = $1 ORDER BY id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(locations)
}
