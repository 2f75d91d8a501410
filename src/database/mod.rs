//! Connection construction for the RustF database extensions
//!
//! This module maps a configured driver name to a connection: registered
//! resolvers are consulted first, then the built-in drivers. Each connection
//! carries the grammar its query builders compile with.

pub mod config;
pub mod connection;
pub mod connections;
pub mod factory;
pub mod resolver;

// Re-export main types for convenience
pub use config::{ConnectionConfig, ConnectionConfigBuilder, DatabasesConfig};
pub use connection::{Connection, ConnectionOptions, RawConnection};
pub use connections::{MySqlConnection, PostgresConnection, SQLiteConnection, SqlServerConnection};
pub use factory::{ConnectionFactory, DatabaseConnectionFactory, BUILTIN_DRIVERS};
pub use resolver::{ConnectionResolver, ResolverRegistry};
