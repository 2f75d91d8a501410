//! MySQL/MariaDB dialect implementation

use super::{DatabaseBackend, SqlDialect};

/// MySQL/MariaDB dialect
pub struct MySQLDialect;

impl MySQLDialect {
    /// Create a new MySQL dialect
    pub fn new() -> Self {
        Self
    }
}

impl Default for MySQLDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for MySQLDialect {
    fn backend(&self) -> DatabaseBackend {
        DatabaseBackend::MySQL
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        if identifier.contains('.') {
            identifier.to_string()
        } else {
            format!("`{}`", identifier.replace('`', "``"))
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
