use crate::types::{NewWeatherRecord, WeatherRow};
use chrono::NaiveDate;

/// Get a single weather row by (city, date)
///
/// City names are matched exactly as stored; no normalization.
pub async fn get(
    executor: impl sqlx::SqliteExecutor<'_>,
    city: &str,
    date: NaiveDate,
) -> Result<Option<WeatherRow>, sqlx::Error> {
    sqlx::query_as::<_, WeatherRow>(
        "SELECT id, city, date, min_temp, max_temp, avg_temp, humidity
         FROM weather
         WHERE city = ? AND date = ?",
    )
    .bind(city)
    .bind(date)
    .fetch_optional(executor)
    .await
}

/// Insert a weather row unless one already exists for its (city, date)
///
/// A lost insert race is a silent no-op; the existing row wins and is
/// never overwritten.
pub async fn insert_if_absent(
    executor: impl sqlx::SqliteExecutor<'_>,
    record: &NewWeatherRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO weather (city, date, min_temp, max_temp, avg_temp, humidity)
         VALUES (?, ?, ?, ?, ?, ?)
         ON CONFLICT (city, date) DO NOTHING",
    )
    .bind(&record.city)
    .bind(record.date)
    .bind(record.min_temp)
    .bind(record.max_temp)
    .bind(record.avg_temp)
    .bind(record.humidity)
    .execute(executor)
    .await?;
    Ok(())
}
