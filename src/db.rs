use std::str::FromStr;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    SqlxSqliteConnector,
    sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};

use crate::error::AppResult;

pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let db = if DbBackend::Sqlite.is_prefix_of(database_url) {
        connect_sqlite(database_url, max_connections).await?
    } else {
        let mut options = ConnectOptions::new(database_url);
        options.max_connections(max_connections).min_connections(1);
        Database::connect(options).await?
    };

    Migrator::up(&db, None).await?;
    tracing::debug!(backend = ?db.get_database_backend(), "schema up to date");
    Ok(db)
}

/// Pragmas are connection-scoped, so they go on the connect options and
/// apply to every connection the pool opens.
async fn connect_sqlite(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("DATABASE_URL")?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .connect_with(options)
        .await
        .context("failed to open SQLite pool")?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
