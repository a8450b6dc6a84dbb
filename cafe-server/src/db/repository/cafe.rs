//! Cafe Repository

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeInput};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, map_url, img_url, location, has_sockets, has_toilet, has_wifi, can_take_calls, seats, coffee_price_pence AS coffee_price";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafe ORDER BY id");
    let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(pool).await?;
    Ok(cafes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafe WHERE id = ?");
    let cafe = sqlx::query_as::<_, Cafe>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

/// Single INSERT; the stored row comes back through RETURNING
pub async fn create(pool: &SqlitePool, data: &CafeInput) -> RepoResult<Cafe> {
    let sql = format!(
        "INSERT INTO cafe (name, map_url, img_url, location, has_sockets, has_toilet, has_wifi, can_take_calls, seats, coffee_price_pence) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let cafe = sqlx::query_as::<_, Cafe>(&sql)
        .bind(&data.name)
        .bind(&data.map_url)
        .bind(&data.img_url)
        .bind(&data.location)
        .bind(data.has_sockets)
        .bind(data.has_toilet)
        .bind(data.has_wifi)
        .bind(data.can_take_calls)
        .bind(data.seats)
        .bind(data.coffee_price)
        .fetch_one(pool)
        .await?;

    tracing::info!(cafe_id = cafe.id, name = %cafe.name, "Cafe created");
    Ok(cafe)
}

/// Replace every column except `id` in a single UPDATE
pub async fn update(pool: &SqlitePool, id: i64, data: &CafeInput) -> RepoResult<Cafe> {
    let sql = format!(
        "UPDATE cafe SET name = ?1, map_url = ?2, img_url = ?3, location = ?4, has_sockets = ?5, has_toilet = ?6, has_wifi = ?7, can_take_calls = ?8, seats = ?9, coffee_price_pence = ?10 WHERE id = ?11 RETURNING {COLUMNS}"
    );
    let cafe = sqlx::query_as::<_, Cafe>(&sql)
        .bind(&data.name)
        .bind(&data.map_url)
        .bind(&data.img_url)
        .bind(&data.location)
        .bind(data.has_sockets)
        .bind(data.has_toilet)
        .bind(data.has_wifi)
        .bind(data.can_take_calls)
        .bind(data.seats)
        .bind(data.coffee_price)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))?;

    tracing::info!(cafe_id = id, "Cafe updated");
    Ok(cafe)
}

/// Hard delete
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }

    tracing::info!(cafe_id = id, "Cafe deleted");
    Ok(())
}
