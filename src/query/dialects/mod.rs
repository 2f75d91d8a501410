//! Database dialect implementations for the query grammars
//!
//! This module contains the database-specific identifier handling, separated
//! by database type. The grammars in `query::grammar` use a dialect to wrap
//! column and table names.

/// Database backend types with a built-in connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseBackend {
    Postgres,
    MySQL,
    MariaDB,
    SQLite,
    SqlServer,
}

impl DatabaseBackend {
    /// Driver name used in connection configuration
    pub fn driver_name(&self) -> &'static str {
        match self {
            DatabaseBackend::Postgres => "pgsql",
            DatabaseBackend::MySQL | DatabaseBackend::MariaDB => "mysql",
            DatabaseBackend::SQLite => "sqlite",
            DatabaseBackend::SqlServer => "sqlsrv",
        }
    }

    /// Resolve a configured driver name to a backend
    ///
    /// Only the exact driver names are recognised; anything else is left to
    /// the caller (usually reported as an unsupported driver).
    pub fn from_driver(driver: &str) -> Option<Self> {
        match driver {
            "pgsql" => Some(DatabaseBackend::Postgres),
            "mysql" => Some(DatabaseBackend::MySQL),
            "sqlite" => Some(DatabaseBackend::SQLite),
            "sqlsrv" => Some(DatabaseBackend::SqlServer),
            _ => None,
        }
    }
}

/// Unified error type for query building
#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("Missing required clause: {clause}. Add .{clause}() to your query.")]
    MissingClause { clause: String },
}

/// Trait for database-specific SQL generation
pub trait SqlDialect: Send + Sync {
    /// Backend this dialect targets
    fn backend(&self) -> DatabaseBackend;

    /// Quote an identifier (table name, column name) for this database
    fn quote_identifier(&self, identifier: &str) -> String;

    /// Support for downcasting to specific dialect implementations
    fn as_any(&self) -> &dyn std::any::Any;
}

pub mod mysql;
pub mod postgres;
pub mod sqlite;
pub mod sqlserver;

pub use mysql::MySQLDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SQLiteDialect;
pub use sqlserver::SqlServerDialect;

/// Factory function to create the appropriate dialect for a database backend
pub fn create_dialect(backend: DatabaseBackend) -> Box<dyn SqlDialect> {
    match backend {
        DatabaseBackend::Postgres => Box::new(PostgresDialect::new()),
        DatabaseBackend::MySQL | DatabaseBackend::MariaDB => Box::new(MySQLDialect::new()),
        DatabaseBackend::SQLite => Box::new(SQLiteDialect::new()),
        DatabaseBackend::SqlServer => Box::new(SqlServerDialect::new()),
    }
}
