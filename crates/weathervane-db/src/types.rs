use chrono::NaiveDate;

/// A stored weather row, one per (city, date)
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct WeatherRow {
    pub id: i64,
    pub city: String,
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub humidity: i64,
}

/// Parameters for inserting a new weather row
#[derive(Debug, Clone)]
pub struct NewWeatherRecord {
    pub city: String,
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub humidity: i64,
}
