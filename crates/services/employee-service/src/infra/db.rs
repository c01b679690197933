//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;

        // Idempotent: creates schema, table and indexes only when missing
        Migrator::up(&connection, None).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "Database connected and schema ensured"
        );

        Ok(Self { connection })
    }

    /// Wrap an existing connection without touching the schema.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }

    /// Close the pool, waiting for checked-out connections.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_fails_without_connection() {
        let db = Database::from_connection(DatabaseConnection::Disconnected);
        assert!(db.ping().await.is_err());
    }
}
