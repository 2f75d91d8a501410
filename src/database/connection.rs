//! Connection trait for the driver dispatcher
//!
//! A connection pairs the raw driver handle with the grammar used to compile
//! queries for it. Built-in connections live in `connections/`; applications
//! can return their own types from a registered resolver.

use crate::query::{DatabaseBackend, Grammar, QueryBuilder};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Driver options passed through untouched from configuration to the
/// connection constructor or resolver
pub type ConnectionOptions = serde_json::Map<String, serde_json::Value>;

/// Raw connection material handed to a connection constructor
///
/// Opening the connection is the driver's business; this layer only carries
/// the value along.
#[derive(Clone)]
pub enum RawConnection {
    /// Connection string to be opened by the driver
    Dsn(String),
    /// Handle created by the application (pool, client, ...)
    Handle(Arc<dyn Any + Send + Sync>),
}

impl RawConnection {
    pub fn dsn(dsn: impl Into<String>) -> Self {
        RawConnection::Dsn(dsn.into())
    }

    pub fn handle<T: Any + Send + Sync>(handle: T) -> Self {
        RawConnection::Handle(Arc::new(handle))
    }

    pub fn as_dsn(&self) -> Option<&str> {
        match self {
            RawConnection::Dsn(dsn) => Some(dsn),
            RawConnection::Handle(_) => None,
        }
    }

    /// Borrow the handle as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            RawConnection::Handle(handle) => (**handle).downcast_ref::<T>(),
            RawConnection::Dsn(_) => None,
        }
    }
}

impl fmt::Debug for RawConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawConnection::Dsn(dsn) => f.debug_tuple("Dsn").field(dsn).finish(),
            RawConnection::Handle(_) => f.write_str("Handle(..)"),
        }
    }
}

/// A database connection as seen by the query layer
pub trait Connection: Send + Sync {
    /// Driver name this connection was created for
    fn driver_name(&self) -> &str;

    fn backend(&self) -> DatabaseBackend;

    fn database_name(&self) -> &str;

    fn table_prefix(&self) -> &str;

    fn options(&self) -> &ConnectionOptions;

    fn raw(&self) -> &RawConnection;

    /// Grammar used by query builders created from this connection, with
    /// the table prefix already applied
    fn query_grammar(&self) -> Arc<dyn Grammar>;

    /// Get a new query builder instance
    fn query(&self) -> QueryBuilder {
        QueryBuilder::with_grammar(self.query_grammar())
    }

    /// Support for downcasting to the concrete connection type
    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("driver", &self.driver_name())
            .field("database", &self.database_name())
            .field("prefix", &self.table_prefix())
            .finish()
    }
}

/// State shared by the built-in connections
#[derive(Clone)]
pub(crate) struct ConnectionState {
    pub(crate) raw: RawConnection,
    pub(crate) database: String,
    pub(crate) prefix: String,
    pub(crate) options: ConnectionOptions,
    pub(crate) grammar: Arc<dyn Grammar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct FakePool(u32);

    #[test]
    fn test_dsn() {
        let raw = RawConnection::dsn("postgres://localhost/app");
        assert_eq!(raw.as_dsn(), Some("postgres://localhost/app"));
        assert!(raw.downcast_ref::<FakePool>().is_none());
    }

    #[test]
    fn test_handle_downcast() {
        let raw = RawConnection::handle(FakePool(7));
        assert_eq!(raw.downcast_ref::<FakePool>(), Some(&FakePool(7)));
        assert!(raw.downcast_ref::<String>().is_none());
        assert!(raw.as_dsn().is_none());
    }

    #[test]
    fn test_debug_hides_handle() {
        let raw = RawConnection::handle(FakePool(1));
        assert_eq!(format!("{:?}", raw), "Handle(..)");
    }
}
