//! Built-in connection implementations, one per supported driver

pub mod mysql;
pub mod postgres;
pub mod sqlite;
pub mod sqlserver;

pub use mysql::MySqlConnection;
pub use postgres::PostgresConnection;
pub use sqlite::SQLiteConnection;
pub use sqlserver::SqlServerConnection;
