//! SQL Server connection

use crate::database::connection::{
    Connection, ConnectionOptions, ConnectionState, RawConnection,
};
use crate::query::{DatabaseBackend, Grammar, StandardGrammar};
use std::sync::Arc;

/// SQL Server connection
#[derive(Clone)]
pub struct SqlServerConnection {
    state: ConnectionState,
}

impl SqlServerConnection {
    /// Create a new SQL Server connection
    pub fn new(
        raw: RawConnection,
        database: impl Into<String>,
        prefix: impl Into<String>,
        options: ConnectionOptions,
    ) -> Self {
        let prefix = prefix.into();
        let grammar: Arc<dyn Grammar> = Arc::new(
            StandardGrammar::new(DatabaseBackend::SqlServer).with_table_prefix(prefix.clone()),
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

impl Connection for SqlServerConnection {
    fn driver_name(&self) -> &str {
        "sqlsrv"
    }

    fn backend(&self) -> DatabaseBackend {
        DatabaseBackend::SqlServer
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
