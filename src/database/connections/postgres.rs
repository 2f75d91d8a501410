//! PostgreSQL connection
//!
//! The only built-in connection whose grammar understands `DISTINCT ON`.

use crate::database::connection::{
    Connection, ConnectionOptions, ConnectionState, RawConnection,
};
use crate::query::{DatabaseBackend, Grammar, PostgresGrammar};
use std::sync::Arc;

/// PostgreSQL connection
#[derive(Clone)]
pub struct PostgresConnection {
    state: ConnectionState,
}

impl PostgresConnection {
    /// Create a new PostgreSQL connection
    pub fn new(
        raw: RawConnection,
        database: impl Into<String>,
        prefix: impl Into<String>,
        options: ConnectionOptions,
    ) -> Self {
        let prefix = prefix.into();
        let grammar: Arc<dyn Grammar> =
            Arc::new(PostgresGrammar::new().with_table_prefix(prefix.clone()));

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

    /// Schema search path from the `search_path` option, `public` by default
    pub fn search_path(&self) -> &str {
        self.state
            .options
            .get("search_path")
            .and_then(|value| value.as_str())
            .unwrap_or("public")
    }
}

impl Connection for PostgresConnection {
    fn driver_name(&self) -> &str {
        "pgsql"
    }

    fn backend(&self) -> DatabaseBackend {
        DatabaseBackend::Postgres
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
