//! Select query building for the RustF database extensions
//!
//! - dialects/: database-specific identifier quoting
//! - builder.rs: the select query state and its fluent API
//! - grammar.rs: select statement compilation, including PostgreSQL `DISTINCT ON`

pub mod builder;
pub mod dialects;
pub mod grammar;

pub use builder::{Aggregate, AggregateFunction, Column, QueryBuilder};
pub use dialects::{DatabaseBackend, QueryError, SqlDialect};
pub use dialects::{MySQLDialect, PostgresDialect, SQLiteDialect, SqlServerDialect};
pub use grammar::{create_grammar, Grammar, PostgresGrammar, StandardGrammar};
