//! MySQL/MariaDB connection

use crate::database::connection::{
    Connection, ConnectionOptions, ConnectionState, RawConnection,
};
use crate::query::{DatabaseBackend, Grammar, StandardGrammar};
use std::sync::Arc;

/// MySQL connection; set the `variant` option to `"mariadb"` for MariaDB
#[derive(Clone)]
pub struct MySqlConnection {
    state: ConnectionState,
}

impl MySqlConnection {
    /// Create a new MySQL connection
    pub fn new(
        raw: RawConnection,
        database: impl Into<String>,
        prefix: impl Into<String>,
        options: ConnectionOptions,
    ) -> Self {
        let prefix = prefix.into();
        let grammar: Arc<dyn Grammar> = Arc::new(
            StandardGrammar::new(DatabaseBackend::MySQL).with_table_prefix(prefix.clone()),
        );

        Self {
            state: ConnectionState {
                raw,
                database: database.into(),
                prefix,
                options,
                grammar,
            },
        }
    }

    pub fn is_maria_db(&self) -> bool {
        self.state
            .options
            .get("variant")
            .and_then(|value| value.as_str())
            .map(|variant| variant.eq_ignore_ascii_case("mariadb"))
            .unwrap_or(false)
    }
}

impl Connection for MySqlConnection {
    fn driver_name(&self) -> &str {
        "mysql"
    }

    fn backend(&self) -> DatabaseBackend {
        if self.is_maria_db() {
            DatabaseBackend::MariaDB
        } else {
            DatabaseBackend::MySQL
        }
    }

    fn database_name(&self) -> &str {
        &self.state.database
    }

    fn table_prefix(&self) -> &str {
        &self.state.prefix
    }

    fn options(&self) -> &ConnectionOptions {
        &self.state.options
    }

    fn raw(&self) -> &RawConnection {
        &self.state.raw
    }

    fn query_grammar(&self) -> Arc<dyn Grammar> {
        Arc::clone(&self.state.grammar)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
