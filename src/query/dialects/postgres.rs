//! PostgreSQL dialect implementation
//!
//! PostgreSQL quotes identifiers with double quotes. Qualified names are
//! passed through so `orders.user_id` keeps working without per-segment quoting.

use super::{DatabaseBackend, SqlDialect};

/// PostgreSQL dialect
pub struct PostgresDialect;

impl PostgresDialect {
    /// Create a new PostgreSQL dialect
    pub fn new() -> Self {
        Self
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for PostgresDialect {
    fn backend(&self) -> DatabaseBackend {
        DatabaseBackend::Postgres
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        // Qualified names (table.column) are left as written
        if identifier.contains('.') {
            identifier.to_string()
        } else {
            format!("\"{}\"", identifier.replace('"', "\"\""))
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
