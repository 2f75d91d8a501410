//! SQL Server dialect implementation
//!
//! SQL Server delimits identifiers with square brackets; a closing bracket
//! inside the name is doubled.

use super::{DatabaseBackend, SqlDialect};

/// SQL Server dialect
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Create a new SQL Server dialect
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlServerDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for SqlServerDialect {
    fn backend(&self) -> DatabaseBackend {
        DatabaseBackend::SqlServer
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        if identifier.contains('.') {
            identifier.to_string()
        } else {
            format!("[{}]", identifier.replace(']', "]]"))
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
