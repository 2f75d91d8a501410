//! RustF database extensions
//!
//! Extends the RustF query builder and connection layer with:
//! - PostgreSQL `DISTINCT ON (expr)` select-list compilation
//! - Per-driver connection resolvers consulted before the built-in drivers
//! - TOML-backed connection configuration

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod database;
pub mod error;
pub mod query;

// Re-export main types for public API
pub use database::{
    Connection, ConnectionConfig, ConnectionFactory, ConnectionOptions, ConnectionResolver,
    DatabaseConnectionFactory, DatabasesConfig, RawConnection, ResolverRegistry,
};
pub use error::{Error, Result};
pub use query::{
    Aggregate, AggregateFunction, Column, DatabaseBackend, Grammar, PostgresGrammar, QueryBuilder,
    QueryError, SqlDialect, StandardGrammar,
};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::database::{
        Connection, ConnectionFactory, DatabaseConnectionFactory, RawConnection, ResolverRegistry,
    };
    pub use crate::error::{Error, Result};
    pub use crate::query::{Column, DatabaseBackend, Grammar, QueryBuilder};
}
