use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::{HistoryRepository, HistoryRow};
use crate::errors::{Result, StorageError};
use crate::schema::historical_values;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Build the connection pool once at startup and run pending migrations.
/// Handlers receive the pool through state; there is no lazily initialized
/// global handle.
pub fn build_pool(database_path: &str) -> Result<SqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_path);
    let pool = Pool::builder()
        .max_size(8)
        .build(manager)
        .map_err(|e| StorageError::Pool(e.to_string()))?;

    let mut conn = pool.get().map_err(|e| StorageError::Pool(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(pool)
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = historical_values)]
struct NewHistoricalValue {
    id: String,
    series: String,
    date: NaiveDate,
    value: f64,
}

pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteHistoryRepository { pool }
    }
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    fn load_series(&self, series: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<HistoryRow>> {
        let mut conn = self.pool.get().map_err(|e| StorageError::Pool(e.to_string()))?;

        let rows = historical_values::table
            .filter(historical_values::series.eq(series))
            .filter(historical_values::date.ge(from))
            .filter(historical_values::date.le(to))
            .order(historical_values::date.asc())
            .select((
                historical_values::series,
                historical_values::date,
                historical_values::value,
            ))
            .load::<(String, NaiveDate, f64)>(&mut conn)
            .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(series, date, value)| HistoryRow { series, date, value })
            .collect())
    }

    async fn seed_series(&self, rows: Vec<HistoryRow>) -> Result<usize> {
        let mut conn = self.pool.get().map_err(|e| StorageError::Pool(e.to_string()))?;

        // Deterministic ids keep concurrent double-seeding idempotent: the
        // second writer's rows hit the unique (series, date) constraint and
        // are skipped without aborting the batch.
        let new_rows: Vec<NewHistoricalValue> = rows
            .into_iter()
            .map(|row| NewHistoricalValue {
                id: format!("{}-{}", row.series, row.date),
                series: row.series,
                date: row.date,
                value: row.value,
            })
            .collect();

        let inserted = diesel::insert_or_ignore_into(historical_values::table)
            .values(&new_rows)
            .execute(&mut conn)
            .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(inserted)
    }
}
