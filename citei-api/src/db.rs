use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::settings::DatabaseSettings;

/// Open the SQLite pool described by `settings`.
///
/// An in-memory database is held by a single connection that is never
/// recycled, otherwise its contents would vanish between requests.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if settings.is_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections)
    };

    let pool = pool.connect_with(options).await?;
    tracing::info!(url = %settings.url, "database pool ready");
    Ok(pool)
}

/// Apply the embedded migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}

/// A migrated in-memory database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".into(),
        max_connections: 1,
    };
    let pool = connect(&settings).await.unwrap();
    migrate(&pool).await.unwrap();
    pool
}
