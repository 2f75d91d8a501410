//! Driver dispatch for connection construction
//!
//! `DatabaseConnectionFactory` consults the resolver registry first and only
//! falls back to the built-in drivers (`mysql`, `pgsql`, `sqlite`, `sqlsrv`)
//! when no resolver is registered for the requested driver.

use crate::database::config::ConnectionConfig;
use crate::database::connection::{Connection, ConnectionOptions, RawConnection};
use crate::database::connections::{
    MySqlConnection, PostgresConnection, SQLiteConnection, SqlServerConnection,
};
use crate::database::resolver::ResolverRegistry;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Driver names with a built-in connection type
pub const BUILTIN_DRIVERS: &[&str] = &["mysql", "pgsql", "sqlite", "sqlsrv"];

/// Creates connections for a driver name
pub trait ConnectionFactory: Send + Sync {
    /// Create a new connection instance
    ///
    /// # Arguments
    /// * `driver` - Driver name from configuration
    /// * `raw` - Raw connection material passed to the constructor
    /// * `database` - Database name
    /// * `prefix` - Table prefix
    /// * `options` - Driver options, passed through unchanged
    ///
    /// # Returns
    /// * `Ok(connection)` - The constructed connection
    /// * `Err(Error::UnsupportedDriver)` - If the driver is unknown
    fn create_connection(
        &self,
        driver: &str,
        raw: RawConnection,
        database: &str,
        prefix: &str,
        options: &ConnectionOptions,
    ) -> Result<Box<dyn Connection>>;

    /// Driver names this factory can build without a resolver
    fn supported_drivers(&self) -> &'static [&'static str] {
        BUILTIN_DRIVERS
    }
}

/// Default factory: registered resolvers first, then the built-in drivers
#[derive(Debug, Clone, Default)]
pub struct DatabaseConnectionFactory {
    resolvers: Arc<ResolverRegistry>,
}

impl DatabaseConnectionFactory {
    pub fn new(resolvers: Arc<ResolverRegistry>) -> Self {
        Self { resolvers }
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    /// Create a connection from a configuration entry
    pub fn make(
        &self,
        config: &ConnectionConfig,
        raw: RawConnection,
    ) -> Result<Box<dyn Connection>> {
        self.create_connection(
            &config.driver,
            raw,
            &config.database,
            &config.prefix,
            &config.options,
        )
    }

    fn create_builtin(
        driver: &str,
        raw: RawConnection,
        database: &str,
        prefix: &str,
        options: &ConnectionOptions,
    ) -> Result<Box<dyn Connection>> {
        let options = options.clone();

        let connection: Box<dyn Connection> = match driver {
            "mysql" => Box::new(MySqlConnection::new(raw, database, prefix, options)),
            "pgsql" => Box::new(PostgresConnection::new(raw, database, prefix, options)),
            "sqlite" => Box::new(SQLiteConnection::new(raw, database, prefix, options)),
            "sqlsrv" => Box::new(SqlServerConnection::new(raw, database, prefix, options)),
            _ => {
                log::warn!("Unsupported database driver '{}'", driver);
                return Err(Error::unsupported_driver(driver));
            }
        };

        log::debug!(
            "Created built-in '{}' connection for database '{}'",
            driver,
            database
        );
        Ok(connection)
    }
}

impl ConnectionFactory for DatabaseConnectionFactory {
    fn create_connection(
        &self,
        driver: &str,
        raw: RawConnection,
        database: &str,
        prefix: &str,
        options: &ConnectionOptions,
    ) -> Result<Box<dyn Connection>> {
        if let Some(resolver) = self.resolvers.get(driver) {
            log::debug!("Using registered resolver for driver '{}'", driver);
            return resolver(raw, database, prefix, options);
        }

        Self::create_builtin(driver, raw, database, prefix, options)
    }
}
