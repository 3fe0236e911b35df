use sqlx::SqlitePool;
use tracing::info;

/// Create the weather table and its uniqueness constraint if missing
///
/// `insert_if_absent` relies on the unique index on (city, date); it must
/// exist before any writes.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS weather (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             city      TEXT NOT NULL,
             date      TEXT NOT NULL,
             min_temp  REAL NOT NULL,
             max_temp  REAL NOT NULL,
             avg_temp  REAL NOT NULL,
             humidity  INTEGER NOT NULL
         )",
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS weather_city_date_idx ON weather (city, date)")
        .execute(pool)
        .await?;
    info!("Database migrations completed");
    Ok(())
}
