//! SQLite connection

use crate::database::connection::{
    Connection, ConnectionOptions, ConnectionState, RawConnection,
};
use crate::query::{DatabaseBackend, Grammar, StandardGrammar};
use std::sync::Arc;

/// SQLite connection
#[derive(Clone)]
pub struct SQLiteConnection {
    state: ConnectionState,
}

impl SQLiteConnection {
    /// Create a new SQLite connection
    pub fn new(
        raw: RawConnection,
        database: impl Into<String>,
        prefix: impl Into<String>,
        options: ConnectionOptions,
    ) -> Self {
        let prefix = prefix.into();
        let grammar: Arc<dyn Grammar> = Arc::new(
            StandardGrammar::new(DatabaseBackend::SQLite).with_table_prefix(prefix.clone()),
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
}

impl Connection for SQLiteConnection {
    fn driver_name(&self) -> &str {
        "sqlite"
    }

    fn backend(&self) -> DatabaseBackend {
        DatabaseBackend::SQLite
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
