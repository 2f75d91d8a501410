//! Per-driver connection resolvers
//!
//! A resolver registered for a driver name replaces the built-in connection
//! construction for that driver entirely, including for the built-in drivers.
//! The registry is an explicit value: create it during startup, register
//! resolvers, then share it with the factory through an `Arc`.

use crate::database::connection::{Connection, ConnectionOptions, RawConnection};
use crate::error::Result;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a connection from `(raw, database, prefix, options)`
pub type ConnectionResolver = Arc<
    dyn Fn(RawConnection, &str, &str, &ConnectionOptions) -> Result<Box<dyn Connection>>
        + Send
        + Sync,
>;

/// Registry of connection resolvers keyed by driver name
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: DashMap<String, ConnectionResolver>,
}

impl ResolverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            resolvers: DashMap::new(),
        }
    }

    /// Register a resolver for a driver
    ///
    /// Returns the resolver previously registered for that driver, if any.
    pub fn register<F>(&self, driver: impl Into<String>, resolver: F) -> Option<ConnectionResolver>
    where
        F: Fn(RawConnection, &str, &str, &ConnectionOptions) -> Result<Box<dyn Connection>>
            + Send
            + Sync
            + 'static,
    {
        let driver = driver.into();
        log::debug!("Registering connection resolver for driver '{}'", driver);
        self.resolvers.insert(driver, Arc::new(resolver))
    }

    /// Get the resolver for a driver
    ///
    /// The resolver is cloned out of the map so calling it holds no lock.
    pub fn get(&self, driver: &str) -> Option<ConnectionResolver> {
        self.resolvers
            .get(driver)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn has(&self, driver: &str) -> bool {
        self.resolvers.contains_key(driver)
    }

    /// Remove the resolver for a driver
    pub fn remove(&self, driver: &str) -> Option<ConnectionResolver> {
        self.resolvers.remove(driver).map(|(_, resolver)| resolver)
    }

    /// List all drivers with a registered resolver
    pub fn drivers(&self) -> Vec<String> {
        let mut drivers: Vec<String> = self
            .resolvers
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        drivers.sort();
        drivers
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn clear(&self) {
        self.resolvers.clear();
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("drivers", &self.drivers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connections::SQLiteConnection;

    fn sqlite_resolver(
        raw: RawConnection,
        database: &str,
        prefix: &str,
        options: &ConnectionOptions,
    ) -> Result<Box<dyn Connection>> {
        Ok(Box::new(SQLiteConnection::new(
            raw,
            database,
            prefix,
            options.clone(),
        )))
    }

    #[test]
    fn test_registry_creation() {
        let registry = ResolverRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.drivers().is_empty());
    }

    #[test]
    fn test_register_and_get() {
        let registry = ResolverRegistry::new();
        assert!(registry.register("duckdb", sqlite_resolver).is_none());

        assert!(registry.has("duckdb"));
        assert!(!registry.has("pgsql"));

        let resolver = registry.get("duckdb").unwrap();
        let connection = resolver(
            RawConnection::dsn("duck.db"),
            "analytics",
            "",
            &ConnectionOptions::new(),
        )
        .unwrap();
        assert_eq!(connection.database_name(), "analytics");
    }

    #[test]
    fn test_register_replaces_previous() {
        let registry = ResolverRegistry::new();
        registry.register("pgsql", sqlite_resolver);

        let previous = registry.register("pgsql", sqlite_resolver);
        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let registry = ResolverRegistry::new();
        registry.register("a", sqlite_resolver);
        registry.register("b", sqlite_resolver);

        assert!(registry.remove("a").is_some());
        assert!(registry.remove("a").is_none());
        assert_eq!(registry.drivers(), vec!["b".to_string()]);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_debug_lists_drivers() {
        let registry = ResolverRegistry::new();
        registry.register("zeta", sqlite_resolver);
        registry.register("alpha", sqlite_resolver);

        assert_eq!(
            format!("{:?}", registry),
            r#"ResolverRegistry { drivers: ["alpha", "zeta"] }"#
        );
    }
}
